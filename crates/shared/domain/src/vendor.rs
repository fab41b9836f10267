//! Vendor entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::VENDOR_COLLECTION;
use crate::record::{EntityKind, Record, Timestamps};
use crate::validation::not_blank;

/// Vendor creation / replacement data transfer object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VendorRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[cfg_attr(feature = "openapi", schema(example = "Acme Devices"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;
    const COLLECTION: &'static str = VENDOR_COLLECTION;

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
pub struct VendorResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub latest_update_date: Option<DateTime<Utc>>,
}
