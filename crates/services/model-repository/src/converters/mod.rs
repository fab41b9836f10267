//! Conversions between request DTOs, persisted records and response envelopes.

mod asset_category;
mod embedded;
mod system;
mod vendor;

pub use asset_category::AssetCategoryConverter;
pub use system::SystemConverter;
pub use vendor::VendorConverter;

use uuid::Uuid;

use common::{AppError, AppResult};
use domain::messages::INVALID_PARAMETERS;
use domain::{Envelope, PaginationInfo, Record, ResponseCode};

/// Per-entity conversion rules.
pub trait Converter: Send + Sync + 'static {
    type Request: Send + Sync + 'static;
    type Entity: Record;
    type Response: Send + Sync + 'static;

    /// Build a record from a request.
    ///
    /// Without an existing id (absent or blank) a fresh UUID v4 is assigned;
    /// otherwise the id is carried through. Timestamps are left to the store.
    fn to_entity(&self, dto: &Self::Request, existing_id: Option<&str>) -> Self::Entity;

    /// Map a record to its client-facing shape.
    fn to_dto(&self, entity: &Self::Entity) -> Self::Response;

    /// SUCCESS envelope for a single record.
    fn to_response(&self, entity: &Self::Entity) -> Envelope<Self::Response> {
        Envelope::single(self.to_dto(entity))
    }

    /// SUCCESS envelope for one page of records, order preserved.
    fn to_response_list(
        &self,
        entities: &[Self::Entity],
        pagination: PaginationInfo,
    ) -> AppResult<Envelope<Self::Response>> {
        if entities.is_empty() {
            return Err(AppError::invalid_argument(INVALID_PARAMETERS));
        }

        let items: Vec<_> = entities.iter().map(|entity| self.to_dto(entity)).collect();
        tracing::debug!("Converted {} records into a response page", items.len());
        Ok(Envelope::page(items, pagination)?)
    }

    /// Failure envelope; SUCCESS / UNDEFINED codes and blank messages are rejected.
    fn synthesize_error(
        &self,
        code: ResponseCode,
        message: &str,
    ) -> AppResult<Envelope<Self::Response>> {
        Ok(Envelope::failure(code, message)?)
    }
}

/// Identifier for a record being built from a request.
pub(crate) fn assign_id(existing_id: Option<&str>) -> String {
    match existing_id {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_id() {
        assert_eq!(assign_id(Some("abc")), "abc");

        let fresh = assign_id(None);
        assert!(Uuid::parse_str(&fresh).is_ok());

        let fresh = assign_id(Some("  "));
        assert!(Uuid::parse_str(&fresh).is_ok());
    }
}
