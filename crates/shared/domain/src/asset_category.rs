//! Asset Category entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::ASSET_CATEGORY_COLLECTION;
use crate::parameter::{Parameter, ParameterRequest, ParameterResponse};
use crate::record::{EntityKind, Record, Timestamps};
use crate::validation::not_blank;

/// Asset Category creation / replacement data transfer object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AssetCategoryRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[cfg_attr(feature = "openapi", schema(example = "Weather Station"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Parameters every asset of this category exposes
    #[serde(default)]
    pub parameters: Vec<ParameterRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for AssetCategory {
    const KIND: EntityKind = EntityKind::AssetCategory;
    const COLLECTION: &'static str = ASSET_CATEGORY_COLLECTION;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AssetCategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterResponse>,
    pub creation_date: Option<DateTime<Utc>>,
    pub latest_update_date: Option<DateTime<Utc>>,
}
