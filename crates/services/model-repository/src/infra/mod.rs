//! Infrastructure layer - storage connections and schema.

mod db;
mod document_db;
pub mod migrations;

pub use db::{MigrationState, RelationalDatabase};
pub use document_db::DocumentDatabase;
pub use migrations::Migrator;

use async_trait::async_trait;

use common::{AppResult, StorageBackend};

/// Connectivity check for the active storage backend.
#[async_trait]
pub trait StorageHealth: Send + Sync {
    fn backend(&self) -> StorageBackend;

    async fn ping(&self) -> AppResult<()>;
}
