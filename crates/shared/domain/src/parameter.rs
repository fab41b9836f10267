//! Parameters, parameter values and key/value attributes.
//!
//! These are embedded objects: Asset Categories declare [`Parameter`]s,
//! Systems carry [`KvAttribute`]s grouping named [`ParameterValue`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::validation::not_blank;

// =============================================================================
// Parameter
// =============================================================================

/// Parameter declaration as received from clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ParameterRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Declared data type of the parameter
    #[serde(default, rename = "type")]
    pub data_type: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub default_value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub default_value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ParameterResponse {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub default_value: Value,
}

// =============================================================================
// ParameterValue
// =============================================================================

/// Named value as received from clients. A missing `value` reads as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ParameterValueRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ParameterValueResponse {
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub value: Value,
}

// =============================================================================
// KvAttribute
// =============================================================================

/// Key/value attribute as received from clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct KvAttributeRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub parameter_values: Vec<ParameterValueRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KvAttribute {
    pub name: String,
    #[serde(default)]
    pub parameter_values: Vec<ParameterValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct KvAttributeResponse {
    pub name: String,
    pub parameter_values: Vec<ParameterValueResponse>,
}
