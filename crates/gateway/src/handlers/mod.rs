//! HTTP handlers.
//!
//! Handlers forward to the persistence gateways and render the returned
//! envelope; the HTTP status follows the envelope code.

pub mod asset_category_handler;
pub mod health_handler;
pub mod system_handler;
pub mod vendor_handler;

pub use asset_category_handler::asset_category_routes;
pub use health_handler::health_routes;
pub use system_handler::system_routes;
pub use vendor_handler::vendor_routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use domain::{Envelope, ResponseCode};

/// HTTP status for an envelope; `success` is used for SUCCESS.
pub fn status_for(code: ResponseCode, success: StatusCode) -> StatusCode {
    match code {
        ResponseCode::Success => success,
        ResponseCode::NotFound => StatusCode::NOT_FOUND,
        ResponseCode::Conflict => StatusCode::CONFLICT,
        ResponseCode::Error | ResponseCode::Undefined => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn reply<T: Serialize>(envelope: Envelope<T>, success: StatusCode) -> Response {
    let status = status_for(envelope.code(), success);
    (status, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(ResponseCode::Success, StatusCode::CREATED), StatusCode::CREATED);
        assert_eq!(status_for(ResponseCode::NotFound, StatusCode::OK), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ResponseCode::Conflict, StatusCode::OK), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ResponseCode::Error, StatusCode::OK),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
