//! Application state for dependency injection.

use std::sync::Arc;

use model_repository_lib::infra::StorageHealth;
use model_repository_lib::service::{AssetCategoryGateway, SystemGateway, VendorGateway};
use model_repository_lib::Gateways;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub systems: Arc<SystemGateway>,
    pub vendors: Arc<VendorGateway>,
    pub asset_categories: Arc<AssetCategoryGateway>,
    pub storage: Arc<dyn StorageHealth>,
}

impl AppState {
    /// Create new app state.
    pub fn new(gateways: Gateways, storage: Arc<dyn StorageHealth>) -> Self {
        Self {
            systems: gateways.systems,
            vendors: gateways.vendors,
            asset_categories: gateways.asset_categories,
            storage,
        }
    }
}
