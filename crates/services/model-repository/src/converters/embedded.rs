//! Field-by-field mapping of embedded objects.

use domain::{
    KvAttribute, KvAttributeRequest, KvAttributeResponse, Location, LocationRequest,
    LocationResponse, Parameter, ParameterRequest, ParameterResponse, ParameterValue,
    ParameterValueRequest, ParameterValueResponse,
};

pub(crate) fn location_entity(dto: Option<&LocationRequest>) -> Location {
    dto.map(|location| Location {
        geo_location: location.geo_location,
        virtual_location: location.virtual_location.clone(),
    })
    .unwrap_or_default()
}

pub(crate) fn location_dto(location: &Location) -> LocationResponse {
    LocationResponse {
        geo_location: location.geo_location,
        virtual_location: location.virtual_location.clone(),
    }
}

pub(crate) fn parameter_entity(dto: &ParameterRequest) -> Parameter {
    Parameter {
        name: dto.name.clone(),
        description: dto.description.clone(),
        data_type: dto.data_type.clone(),
        default_value: dto.default_value.clone(),
    }
}

pub(crate) fn parameter_dto(parameter: &Parameter) -> ParameterResponse {
    ParameterResponse {
        name: parameter.name.clone(),
        description: parameter.description.clone(),
        data_type: parameter.data_type.clone(),
        default_value: parameter.default_value.clone(),
    }
}

fn parameter_value_entity(dto: &ParameterValueRequest) -> ParameterValue {
    ParameterValue {
        name: dto.name.clone(),
        value: dto.value.clone(),
    }
}

fn parameter_value_dto(value: &ParameterValue) -> ParameterValueResponse {
    ParameterValueResponse {
        name: value.name.clone(),
        value: value.value.clone(),
    }
}

pub(crate) fn kv_attribute_entity(dto: &KvAttributeRequest) -> KvAttribute {
    KvAttribute {
        name: dto.name.clone(),
        parameter_values: dto.parameter_values.iter().map(parameter_value_entity).collect(),
    }
}

pub(crate) fn kv_attribute_dto(attribute: &KvAttribute) -> KvAttributeResponse {
    KvAttributeResponse {
        name: attribute.name.clone(),
        parameter_values: attribute
            .parameter_values
            .iter()
            .map(parameter_value_dto)
            .collect(),
    }
}
