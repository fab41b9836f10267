//! System entity and related types.
//!
//! A System is an IoT installation owned by an organization, optionally
//! placed either at a pair of coordinates or at a virtual location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::constants::SYSTEM_COLLECTION;
use crate::location::{Location, LocationRequest, LocationResponse};
use crate::parameter::{KvAttribute, KvAttributeRequest, KvAttributeResponse};
use crate::record::{EntityKind, Record, Timestamps};
use crate::validation::not_blank;

/// System creation / replacement data transfer object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SystemRequest {
    /// Human readable name (mandatory)
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[cfg_attr(feature = "openapi", schema(example = "Sensor-A"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<LocationRequest>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Acme"))]
    pub organization: String,
    /// Free-form JSON documents
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub additional_information: Vec<Value>,
    #[serde(default)]
    pub attributes: Vec<KvAttributeRequest>,
}

/// System as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub additional_information: Vec<Value>,
    #[serde(default)]
    pub attributes: Vec<KvAttribute>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for System {
    const KIND: EntityKind = EntityKind::System;
    const COLLECTION: &'static str = SYSTEM_COLLECTION;

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

/// System response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SystemResponse {
    /// Database identifier (UUID v4)
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: LocationResponse,
    pub organization: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub additional_information: Vec<Value>,
    pub attributes: Vec<KvAttributeResponse>,
    pub creation_date: Option<DateTime<Utc>>,
    pub latest_update_date: Option<DateTime<Utc>>,
}
