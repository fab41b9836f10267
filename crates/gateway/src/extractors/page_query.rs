//! Pagination query extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use common::AppError;
use domain::messages::INVALID_PARAMETERS;
use domain::PageRequest;

/// `?page=&size=` with defaults; unparsable values are an invalid argument.
pub struct PageQuery(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(request) = Query::<PageRequest>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected paging parameters: {}", e.body_text());
                AppError::invalid_argument(INVALID_PARAMETERS)
            })?;

        Ok(PageQuery(request))
    }
}
