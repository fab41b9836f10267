//! Model Repository Library
//!
//! Validated, backend-agnostic CRUD for Systems, Vendors and Asset
//! Categories. The HTTP gateway embeds this crate; it can also be driven
//! directly (migrations, seeding, tests).

pub mod config;
pub mod converters;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;
pub mod validators;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use common::{AppResult, StorageBackend};
use domain::{AssetCategory, System, Vendor};

use crate::config::ModelRepositoryConfig;
use crate::converters::{AssetCategoryConverter, SystemConverter, VendorConverter};
use crate::infra::{DocumentDatabase, RelationalDatabase, StorageHealth};
use crate::repository::{DocumentStore, EntityStore, RelationalStore};
use crate::service::{
    AssetCategoryGateway, EntityGateway, PersistenceHook, SystemGateway, VendorGateway,
};
use crate::validators::{AssetCategoryValidator, SystemValidator, VendorValidator};

pub use seed::seed_systems;

/// One store per entity type, all on the same backend.
#[derive(Clone)]
pub struct Stores {
    pub systems: Arc<dyn EntityStore<System>>,
    pub vendors: Arc<dyn EntityStore<Vendor>>,
    pub asset_categories: Arc<dyn EntityStore<AssetCategory>>,
}

impl Stores {
    /// Stores over MongoDB collections
    pub fn document(database: &mongodb::Database) -> Self {
        Self {
            systems: Arc::new(DocumentStore::<System>::new(database)),
            vendors: Arc::new(DocumentStore::<Vendor>::new(database)),
            asset_categories: Arc::new(DocumentStore::<AssetCategory>::new(database)),
        }
    }

    /// Stores over SQL tables
    pub fn relational(connection: DatabaseConnection) -> Self {
        Self {
            systems: Arc::new(RelationalStore::<System>::new(connection.clone())),
            vendors: Arc::new(RelationalStore::<Vendor>::new(connection.clone())),
            asset_categories: Arc::new(RelationalStore::<AssetCategory>::new(connection)),
        }
    }
}

/// The three persistence gateways.
#[derive(Clone)]
pub struct Gateways {
    pub systems: Arc<SystemGateway>,
    pub vendors: Arc<VendorGateway>,
    pub asset_categories: Arc<AssetCategoryGateway>,
}

impl Gateways {
    /// Wire gateways over the given stores; every hook is shared by all three.
    pub fn from_stores(stores: Stores, hooks: &[Arc<dyn PersistenceHook>]) -> Self {
        let systems = hooks.iter().cloned().fold(
            EntityGateway::new(stores.systems, Arc::new(SystemValidator), SystemConverter),
            EntityGateway::with_hook,
        );
        let vendors = hooks.iter().cloned().fold(
            EntityGateway::new(stores.vendors, Arc::new(VendorValidator), VendorConverter),
            EntityGateway::with_hook,
        );
        let asset_categories = hooks.iter().cloned().fold(
            EntityGateway::new(
                stores.asset_categories,
                Arc::new(AssetCategoryValidator),
                AssetCategoryConverter,
            ),
            EntityGateway::with_hook,
        );

        Self {
            systems: Arc::new(systems),
            vendors: Arc::new(vendors),
            asset_categories: Arc::new(asset_categories),
        }
    }
}

/// Connect the configured backend and build gateways over it.
///
/// The relational backend has its pending migrations applied first.
pub async fn connect(
    config: &ModelRepositoryConfig,
    hooks: &[Arc<dyn PersistenceHook>],
) -> AppResult<(Gateways, Arc<dyn StorageHealth>)> {
    info!("Using {} storage backend", config.storage);

    match config.storage {
        StorageBackend::Mongo => {
            let db = DocumentDatabase::connect(&config.document_store).await?;
            let stores = Stores::document(db.database());
            let health: Arc<dyn StorageHealth> = Arc::new(db);
            Ok((Gateways::from_stores(stores, hooks), health))
        }
        StorageBackend::Relational => {
            let db = RelationalDatabase::connect(&config.database).await?;
            db.migrate_up().await?;
            let stores = Stores::relational(db.connection().clone());
            let health: Arc<dyn StorageHealth> = Arc::new(db);
            Ok((Gateways::from_stores(stores, hooks), health))
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &ModelRepositoryConfig,
) -> AppResult<()> {
    let db = RelationalDatabase::connect(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.migrate_up().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.migrate_down().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for state in db.migration_states().await? {
                let marker = if state.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, state.name);
            }
        }
        MigrateAction::Fresh => {
            db.migrate_fresh().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
