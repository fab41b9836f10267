//! Domain layer - Model Repository entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the three shapes of every entity (request, persisted record, response),
//! the response envelope, pagination metadata and the message catalogue.

pub mod asset_category;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod location;
pub mod messages;
pub mod pagination;
pub mod parameter;
pub mod record;
pub mod system;
pub mod validation;
pub mod vendor;

pub use asset_category::{AssetCategory, AssetCategoryRequest, AssetCategoryResponse};
pub use constants::*;
pub use envelope::{Envelope, ResponseCode};
pub use error::{DomainError, DomainResult};
pub use location::{GeoLocation, Location, LocationRequest, LocationResponse};
pub use pagination::{PageRequest, PaginationInfo};
pub use parameter::{
    KvAttribute, KvAttributeRequest, KvAttributeResponse, Parameter, ParameterRequest,
    ParameterResponse, ParameterValue, ParameterValueRequest, ParameterValueResponse,
};
pub use record::{EntityKind, Record, Timestamps};
pub use system::{System, SystemRequest, SystemResponse};
pub use vendor::{Vendor, VendorRequest, VendorResponse};
