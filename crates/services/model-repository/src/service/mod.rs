//! Service layer - persistence gateways and their hooks.

pub mod gateway;
pub mod hooks;

pub use gateway::{
    AssetCategoryGateway, EntityGateway, PersistenceGateway, SystemGateway, VendorGateway,
};
#[cfg(any(test, feature = "test-utils"))]
pub use gateway::MockPersistenceGateway;
pub use hooks::{LoggingHook, PersistenceHook};
