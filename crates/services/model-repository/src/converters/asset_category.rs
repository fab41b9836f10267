use domain::{AssetCategory, AssetCategoryRequest, AssetCategoryResponse, Timestamps};

use super::embedded::{parameter_dto, parameter_entity};
use super::{assign_id, Converter};

#[derive(Debug, Clone, Copy, Default)]
pub struct AssetCategoryConverter;

impl Converter for AssetCategoryConverter {
    type Request = AssetCategoryRequest;
    type Entity = AssetCategory;
    type Response = AssetCategoryResponse;

    fn to_entity(&self, dto: &AssetCategoryRequest, existing_id: Option<&str>) -> AssetCategory {
        AssetCategory {
            id: assign_id(existing_id),
            name: dto.name.clone(),
            description: dto.description.clone(),
            parameters: dto.parameters.iter().map(parameter_entity).collect(),
            timestamps: Timestamps::default(),
        }
    }

    fn to_dto(&self, entity: &AssetCategory) -> AssetCategoryResponse {
        AssetCategoryResponse {
            id: entity.id.clone(),
            name: entity.name.clone(),
            description: entity.description.clone(),
            parameters: entity.parameters.iter().map(parameter_dto).collect(),
            creation_date: entity.timestamps.creation_date,
            latest_update_date: entity.timestamps.latest_update_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ParameterRequest;
    use serde_json::json;

    #[test]
    fn test_parameters_mapped() {
        let dto = AssetCategoryRequest {
            name: "Weather Station".to_string(),
            description: String::new(),
            parameters: vec![ParameterRequest {
                name: "temperature".to_string(),
                description: "Air temperature".to_string(),
                data_type: "float".to_string(),
                default_value: json!(20.0),
            }],
        };

        let entity = AssetCategoryConverter.to_entity(&dto, Some("category-1"));
        let response = AssetCategoryConverter.to_dto(&entity);

        assert_eq!(response.id, "category-1");
        assert_eq!(response.parameters.len(), 1);
        assert_eq!(response.parameters[0].data_type, "float");
        assert_eq!(response.parameters[0].default_value, json!(20.0));
    }
}
