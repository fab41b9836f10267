//! Location value objects embedded in Systems.

use serde::{Deserialize, Serialize};

/// A pair of coordinates. Zero means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeoLocation {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl GeoLocation {
    /// Both coordinates are set (non-zero).
    pub fn is_complete(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }

    /// At least one coordinate is set.
    pub fn is_partial(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// Location as received from clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[serde(default)]
    pub geo_location: GeoLocation,
    #[serde(default)]
    pub virtual_location: String,
}

impl LocationRequest {
    pub fn has_virtual_location(&self) -> bool {
        !self.virtual_location.trim().is_empty()
    }
}

/// Location as persisted inside a System record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub geo_location: GeoLocation,
    #[serde(default)]
    pub virtual_location: String,
}

/// Location as returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub geo_location: GeoLocation,
    pub virtual_location: String,
}
