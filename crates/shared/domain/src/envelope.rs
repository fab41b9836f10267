//! Uniform response envelope.
//!
//! Every operation of the repository answers with an [`Envelope`]: a status
//! code, a human readable message and either a single payload or a page of
//! payloads with its [`PaginationInfo`].
//!
//! The fields are private so the invariants hold for every value built
//! through the constructors:
//! - a SUCCESS envelope carrying data has a payload or a non-empty list
//! - a non-SUCCESS envelope has a non-blank message and no payload

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::messages::{INTERNAL_SERVER_ERROR, SUCCESS, VALIDATION_SUCCESS};
use crate::pagination::PaginationInfo;

#[cfg(feature = "openapi")]
use crate::{AssetCategoryResponse, SystemResponse, VendorResponse};

/// Outcome classification carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Success,
    Error,
    NotFound,
    Conflict,
    Undefined,
}

impl ResponseCode {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Success)
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ResponseCode::Success => "SUCCESS",
            ResponseCode::Error => "ERROR",
            ResponseCode::NotFound => "NOT_FOUND",
            ResponseCode::Conflict => "CONFLICT",
            ResponseCode::Undefined => "UNDEFINED",
        };
        write!(f, "{}", text)
    }
}

/// Response wrapper returned by validators, converters and gateways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::ToSchema),
    aliases(
        SystemEnvelope = Envelope<SystemResponse>,
        VendorEnvelope = Envelope<VendorResponse>,
        AssetCategoryEnvelope = Envelope<AssetCategoryResponse>
    )
)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    code: ResponseCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    list_of_responses: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pagination_info: Option<PaginationInfo>,
}

impl<T> Envelope<T> {
    /// SUCCESS envelope wrapping a single payload.
    pub fn single(payload: T) -> Self {
        Self {
            code: ResponseCode::Success,
            message: SUCCESS.to_string(),
            response: Some(payload),
            list_of_responses: None,
            pagination_info: None,
        }
    }

    /// SUCCESS envelope wrapping one page of payloads.
    pub fn page(items: Vec<T>, pagination: PaginationInfo) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::invalid_argument(
                "A page envelope needs at least one payload",
            ));
        }

        Ok(Self {
            code: ResponseCode::Success,
            message: SUCCESS.to_string(),
            response: None,
            list_of_responses: Some(items),
            pagination_info: Some(pagination),
        })
    }

    /// SUCCESS envelope without payload (deletions).
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self::bare(ResponseCode::Success, message.into())
    }

    /// Positive validation verdict.
    pub fn validated() -> Self {
        Self::bare(ResponseCode::Success, VALIDATION_SUCCESS.to_string())
    }

    /// Failure envelope with a caller-supplied code.
    ///
    /// Rejects SUCCESS and UNDEFINED codes as well as blank messages.
    pub fn failure(code: ResponseCode, message: impl Into<String>) -> DomainResult<Self> {
        let message = message.into();
        if matches!(code, ResponseCode::Success | ResponseCode::Undefined) {
            return Err(DomainError::invalid_argument(format!(
                "Response code {} cannot describe a failure",
                code
            )));
        }
        if message.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "A failure envelope needs a message",
            ));
        }

        Ok(Self::bare(code, message))
    }

    /// ERROR envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self::bare(ResponseCode::Error, non_blank(message.into()))
    }

    /// NOT_FOUND envelope.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::bare(ResponseCode::NotFound, non_blank(message.into()))
    }

    /// CONFLICT envelope.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::bare(ResponseCode::Conflict, non_blank(message.into()))
    }

    fn bare(code: ResponseCode, message: String) -> Self {
        Self {
            code,
            message,
            response: None,
            list_of_responses: None,
            pagination_info: None,
        }
    }

    pub fn code(&self) -> ResponseCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    pub fn list_of_responses(&self) -> Option<&[T]> {
        self.list_of_responses.as_deref()
    }

    pub fn pagination_info(&self) -> Option<&PaginationInfo> {
        self.pagination_info.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }

    /// Take the single payload out of the envelope.
    pub fn into_response(self) -> Option<T> {
        self.response
    }
}

fn non_blank(message: String) -> String {
    if message.trim().is_empty() {
        INTERNAL_SERVER_ERROR.to_string()
    } else {
        message
    }
}
