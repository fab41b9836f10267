//! JSON body extractor answering malformed payloads with an envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;
use domain::messages::HTTP_MESSAGE_NOT_READABLE;

/// JSON extractor whose rejection is an ERROR envelope with HTTP 400.
///
/// Field-level checks are left to the repository validators.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::invalid_argument(HTTP_MESSAGE_NOT_READABLE)
        })?;

        Ok(JsonBody(value))
    }
}
