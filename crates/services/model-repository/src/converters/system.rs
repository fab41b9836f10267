use domain::{System, SystemRequest, SystemResponse, Timestamps};

use super::embedded::{kv_attribute_dto, kv_attribute_entity, location_dto, location_entity};
use super::{assign_id, Converter};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemConverter;

impl Converter for SystemConverter {
    type Request = SystemRequest;
    type Entity = System;
    type Response = SystemResponse;

    fn to_entity(&self, dto: &SystemRequest, existing_id: Option<&str>) -> System {
        System {
            id: assign_id(existing_id),
            name: dto.name.clone(),
            description: dto.description.clone(),
            location: location_entity(dto.location.as_ref()),
            organization: dto.organization.clone(),
            additional_information: dto.additional_information.clone(),
            attributes: dto.attributes.iter().map(kv_attribute_entity).collect(),
            timestamps: Timestamps::default(),
        }
    }

    fn to_dto(&self, entity: &System) -> SystemResponse {
        SystemResponse {
            id: entity.id.clone(),
            name: entity.name.clone(),
            description: entity.description.clone(),
            location: location_dto(&entity.location),
            organization: entity.organization.clone(),
            additional_information: entity.additional_information.clone(),
            attributes: entity.attributes.iter().map(kv_attribute_dto).collect(),
            creation_date: entity.timestamps.creation_date,
            latest_update_date: entity.timestamps.latest_update_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::messages::SUCCESS;
    use domain::{
        GeoLocation, KvAttributeRequest, LocationRequest, PaginationInfo, ParameterValueRequest,
        ResponseCode,
    };
    use serde_json::json;

    fn request() -> SystemRequest {
        SystemRequest {
            name: "Sensor-A".to_string(),
            description: "Soil moisture sensor".to_string(),
            location: Some(LocationRequest {
                geo_location: GeoLocation {
                    latitude: 38.0,
                    longitude: 23.7,
                },
                virtual_location: String::new(),
            }),
            organization: "Acme".to_string(),
            additional_information: vec![json!({"firmware": "1.2.0"})],
            attributes: vec![KvAttributeRequest {
                name: "calibration".to_string(),
                parameter_values: vec![ParameterValueRequest {
                    name: "offset".to_string(),
                    value: json!(0.25),
                }],
            }],
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let converter = SystemConverter;
        let entity = converter.to_entity(&request(), None);
        let envelope = converter.to_response(&entity);

        assert_eq!(envelope.code(), ResponseCode::Success);
        assert_eq!(envelope.message(), SUCCESS);

        let dto = envelope.into_response().unwrap();
        assert_eq!(dto.id, entity.id);
        assert_eq!(dto.name, "Sensor-A");
        assert_eq!(dto.description, "Soil moisture sensor");
        assert_eq!(dto.organization, "Acme");
        assert_eq!(dto.location.geo_location.latitude, 38.0);
        assert_eq!(dto.additional_information, vec![json!({"firmware": "1.2.0"})]);
        assert_eq!(dto.attributes[0].parameter_values[0].value, json!(0.25));
    }

    #[test]
    fn test_existing_id_preserved() {
        let entity = SystemConverter.to_entity(&request(), Some("system-1"));
        assert_eq!(entity.id, "system-1");
        assert!(entity.timestamps.creation_date.is_none());
    }

    #[test]
    fn test_missing_location_becomes_empty() {
        let dto = SystemRequest {
            location: None,
            ..request()
        };
        let entity = SystemConverter.to_entity(&dto, None);
        assert_eq!(entity.location, Default::default());
    }

    #[test]
    fn test_list_preserves_order() {
        let converter = SystemConverter;
        let first = converter.to_entity(&request(), Some("a"));
        let second = converter.to_entity(&request(), Some("b"));
        let pagination = PaginationInfo::new(2, 10, 0).unwrap();

        let envelope = converter
            .to_response_list(&[first, second], pagination)
            .unwrap();
        let ids: Vec<&str> = envelope
            .list_of_responses()
            .unwrap()
            .iter()
            .map(|dto| dto.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_list_rejected() {
        let pagination = PaginationInfo::new(0, 10, 0).unwrap();
        assert!(SystemConverter.to_response_list(&[], pagination).is_err());
    }

    #[test]
    fn test_synthesize_error_rules() {
        let converter = SystemConverter;
        assert!(converter.synthesize_error(ResponseCode::Success, "x").is_err());
        assert!(converter.synthesize_error(ResponseCode::Undefined, "x").is_err());
        assert!(converter.synthesize_error(ResponseCode::Error, "").is_err());

        let envelope = converter
            .synthesize_error(ResponseCode::NotFound, "nothing here")
            .unwrap();
        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert!(envelope.response().is_none());
    }
}
