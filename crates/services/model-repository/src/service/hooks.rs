//! Post-persistence hooks.
//!
//! Gateways call every registered hook after a save or delete has been
//! committed. Hooks observe; they cannot fail the operation.

use serde_json::Value;
use tracing::{error, info};

use domain::{EntityKind, DOCUMENT_ID_FIELD};

/// Callback invoked after successful writes.
pub trait PersistenceHook: Send + Sync {
    /// A record was inserted or replaced.
    fn after_save(&self, kind: EntityKind, id: &str);

    /// A record was removed; `record` is its raw stored form.
    fn after_delete(&self, kind: EntityKind, record: &Value);

    /// A bulk delete removed `count` records.
    fn after_delete_all(&self, _kind: EntityKind, _count: u64) {}
}

/// Logs every persistence transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

impl PersistenceHook for LoggingHook {
    fn after_save(&self, kind: EntityKind, id: &str) {
        info!("{} with DatabaseID: '{}' has been persisted.", kind, id);
    }

    fn after_delete(&self, kind: EntityKind, record: &Value) {
        match deleted_identifier(record) {
            Some(id) => info!("{} with DatabaseID: '{}' has been deleted.", kind, id),
            None => error!("{} deletion reported without a database identifier.", kind),
        }
    }

    fn after_delete_all(&self, kind: EntityKind, count: u64) {
        info!("{} {} have been deleted.", count, kind.plural());
    }
}

/// The `_id` of a raw stored record, when present.
pub fn deleted_identifier(record: &Value) -> Option<&str> {
    record
        .get(DOCUMENT_ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}
