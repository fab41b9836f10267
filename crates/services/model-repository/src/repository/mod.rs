//! Repository layer for data access.
//!
//! [`EntityStore`] is the storage contract behind every gateway. It has a
//! document implementation over MongoDB and a relational one over SeaORM;
//! the active one is chosen once at startup.

mod document_store;
pub mod entities;
mod relational_store;

pub use document_store::DocumentStore;
pub use relational_store::RelationalStore;

use async_trait::async_trait;

use common::AppResult;
use domain::{PageRequest, Record};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage contract for one entity type.
///
/// Listing and name lookups are ordered by creation date, then id, so the
/// "first" record for a name is always the oldest one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EntityStore<T: Record>: Send + Sync {
    /// Find a record by database identifier
    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>>;

    /// Find the oldest record carrying the given name
    async fn find_first_by_name(&self, name: &str) -> AppResult<Option<T>>;

    /// Number of stored records
    async fn count(&self) -> AppResult<u64>;

    /// Fetch one 0-based page; callers check the page against [`count`](Self::count) first
    async fn find_page(&self, request: PageRequest) -> AppResult<Vec<T>>;

    /// Insert or fully replace a record, stamping its timestamps
    async fn save(&self, record: T) -> AppResult<T>;

    /// Remove a record; `false` when nothing matched
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// Remove every record, returning how many were removed
    async fn delete_all(&self) -> AppResult<u64>;
}
