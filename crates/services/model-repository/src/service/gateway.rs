//! Persistence gateway - CRUD operations answering with envelopes.
//!
//! One generic implementation, [`EntityGateway`], serves every entity type:
//! it validates, converts, calls the [`EntityStore`] and wraps the outcome.
//! Not-found lookups and storage failures are reported inside the envelope;
//! only caller mistakes (blank identifiers, zero page size) and validator
//! rejections come back as errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use common::{AppError, AppResult};
use domain::messages::{self, INVALID_PARAMETERS};
use domain::{
    AssetCategoryRequest, AssetCategoryResponse, EntityKind, Envelope, PageRequest,
    PaginationInfo, Record, ResponseCode, SystemRequest, SystemResponse, VendorRequest,
    VendorResponse,
};

use crate::converters::Converter;
use crate::repository::EntityStore;
use crate::service::hooks::PersistenceHook;
use crate::validators::Validator;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Per-entity CRUD contract.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersistenceGateway<Req: Send + Sync + 'static, Resp: Send + Sync + 'static>:
    Send + Sync
{
    /// Look a record up by database identifier
    async fn retrieve_by_id(&self, id: &str) -> AppResult<Envelope<Resp>>;

    /// Look the oldest record with the given name up
    async fn retrieve_by_name(&self, name: &str) -> AppResult<Envelope<Resp>>;

    /// Fetch one 0-based page
    async fn retrieve_all(&self, page: u64, size: u64) -> AppResult<Envelope<Resp>>;

    /// Validate and persist a new record
    async fn create(&self, dto: Req) -> AppResult<Envelope<Resp>>;

    /// Validate and fully replace an existing record
    async fn update(&self, dto: Req, id: &str) -> AppResult<Envelope<Resp>>;

    /// Remove one record
    async fn delete(&self, id: &str) -> AppResult<Envelope<Resp>>;

    /// Remove every record
    async fn delete_all(&self) -> AppResult<Envelope<Resp>>;
}

pub type SystemGateway = dyn PersistenceGateway<SystemRequest, SystemResponse>;
pub type VendorGateway = dyn PersistenceGateway<VendorRequest, VendorResponse>;
pub type AssetCategoryGateway = dyn PersistenceGateway<AssetCategoryRequest, AssetCategoryResponse>;

/// Gateway over any [`EntityStore`] backend.
pub struct EntityGateway<C: Converter> {
    store: Arc<dyn EntityStore<C::Entity>>,
    validator: Arc<dyn Validator<C::Request>>,
    converter: C,
    hooks: Vec<Arc<dyn PersistenceHook>>,
}

impl<C: Converter> EntityGateway<C> {
    /// Create new gateway instance without hooks
    pub fn new(
        store: Arc<dyn EntityStore<C::Entity>>,
        validator: Arc<dyn Validator<C::Request>>,
        converter: C,
    ) -> Self {
        Self {
            store,
            validator,
            converter,
            hooks: Vec::new(),
        }
    }

    /// Register a post-persistence hook
    pub fn with_hook(mut self, hook: Arc<dyn PersistenceHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    fn kind() -> EntityKind {
        <C::Entity as Record>::KIND
    }

    fn require(value: &str) -> AppResult<()> {
        if value.trim().is_empty() {
            return Err(AppError::invalid_argument(INVALID_PARAMETERS));
        }
        Ok(())
    }

    fn check(&self, dto: &C::Request) -> AppResult<()> {
        let verdict = self.validator.validate(dto);
        match verdict.code() {
            ResponseCode::Success => Ok(()),
            ResponseCode::Conflict => Err(AppError::conflict(verdict.message())),
            _ => Err(AppError::validation(verdict.message())),
        }
    }

    fn failure(&self, code: ResponseCode, message: String) -> AppResult<Envelope<C::Response>> {
        self.converter.synthesize_error(code, &message)
    }

    fn page_limit_exceeded(&self, pagination: &PaginationInfo) -> AppResult<Envelope<C::Response>> {
        let message = messages::exceeded_page_limit(Self::kind(), pagination.total_pages());
        info!("{}", message);
        self.failure(ResponseCode::NotFound, message)
    }

    fn notify_saved(&self, record: &C::Entity) {
        for hook in &self.hooks {
            hook.after_save(Self::kind(), record.id());
        }
    }

    fn notify_deleted(&self, record: &C::Entity) {
        let raw = match serde_json::to_value(record) {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    "Failed to serialize deleted {} '{}' for hooks: {}",
                    Self::kind(),
                    record.id(),
                    e
                );
                Value::Null
            }
        };
        for hook in &self.hooks {
            hook.after_delete(Self::kind(), &raw);
        }
    }
}

#[async_trait]
impl<C: Converter> PersistenceGateway<C::Request, C::Response> for EntityGateway<C> {
    async fn retrieve_by_id(&self, id: &str) -> AppResult<Envelope<C::Response>> {
        Self::require(id)?;
        let kind = Self::kind();

        match self.store.find_by_id(id).await {
            Ok(Some(record)) => {
                info!("Retrieved {} with ID: '{}'", kind, id);
                Ok(self.converter.to_response(&record))
            }
            Ok(None) => {
                info!("No {} found with ID: '{}'", kind, id);
                self.failure(ResponseCode::NotFound, messages::not_found_id(kind, id))
            }
            Err(e) => {
                error!("Failed to retrieve {} '{}': {}", kind, id, e);
                self.failure(ResponseCode::Error, messages::error_on_retrieval_id(kind, id))
            }
        }
    }

    async fn retrieve_by_name(&self, name: &str) -> AppResult<Envelope<C::Response>> {
        Self::require(name)?;
        let kind = Self::kind();

        match self.store.find_first_by_name(name).await {
            Ok(Some(record)) => {
                info!("Retrieved {} with Name: '{}'", kind, name);
                Ok(self.converter.to_response(&record))
            }
            Ok(None) => {
                info!("No {} found with Name: '{}'", kind, name);
                self.failure(ResponseCode::NotFound, messages::not_found_name(kind, name))
            }
            Err(e) => {
                error!("Failed to retrieve {} named '{}': {}", kind, name, e);
                self.failure(
                    ResponseCode::Error,
                    messages::error_on_retrieval_name(kind, name),
                )
            }
        }
    }

    async fn retrieve_all(&self, page: u64, size: u64) -> AppResult<Envelope<C::Response>> {
        let request = PageRequest::normalized(page, size)?;
        let kind = Self::kind();

        let total = match self.store.count().await {
            Ok(total) => total,
            Err(e) => {
                error!("Failed to count {}: {}", kind.plural(), e);
                return self.failure(ResponseCode::Error, messages::error_on_retrieval_many(kind));
            }
        };

        let pagination = PaginationInfo::new(total, request.size, request.page)?;
        if total == 0 {
            let message = messages::no_entities_found(kind);
            info!("{}", message);
            return self.failure(ResponseCode::NotFound, message);
        }
        if request.is_beyond(&pagination) {
            return self.page_limit_exceeded(&pagination);
        }

        let records = match self.store.find_page(request).await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to retrieve page {} of {}: {}", request.page, kind.plural(), e);
                return self.failure(ResponseCode::Error, messages::error_on_retrieval_many(kind));
            }
        };
        // Records removed between the count and the fetch
        if records.is_empty() {
            return self.page_limit_exceeded(&pagination);
        }

        debug!(
            "Retrieved {} {} (page {} of {})",
            records.len(),
            kind.plural(),
            request.page,
            pagination.total_pages()
        );
        self.converter.to_response_list(&records, pagination)
    }

    async fn create(&self, dto: C::Request) -> AppResult<Envelope<C::Response>> {
        self.check(&dto)?;
        let kind = Self::kind();

        let record = self.converter.to_entity(&dto, None);
        let name = record.name().to_string();

        match self.store.save(record).await {
            Ok(saved) => {
                info!("Created {} with ID: '{}'", kind, saved.id());
                self.notify_saved(&saved);
                Ok(self.converter.to_response(&saved))
            }
            Err(e) => {
                error!("Failed to create {} '{}': {}", kind, name, e);
                self.failure(ResponseCode::Error, messages::error_on_creation(kind, &name))
            }
        }
    }

    async fn update(&self, dto: C::Request, id: &str) -> AppResult<Envelope<C::Response>> {
        Self::require(id)?;
        self.check(&dto)?;
        let kind = Self::kind();

        let existing = match self.store.find_by_id(id).await {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                info!("No {} found with ID: '{}'", kind, id);
                return self.failure(ResponseCode::NotFound, messages::not_found_id(kind, id));
            }
            Err(e) => {
                error!("Failed to retrieve {} '{}' for update: {}", kind, id, e);
                return self.failure(ResponseCode::Error, messages::error_on_retrieval_id(kind, id));
            }
        };

        let mut record = self.converter.to_entity(&dto, Some(id));
        record.timestamps_mut().creation_date = existing.timestamps().creation_date;

        match self.store.save(record).await {
            Ok(saved) => {
                info!("Updated {} with ID: '{}'", kind, id);
                self.notify_saved(&saved);
                Ok(self.converter.to_response(&saved))
            }
            Err(e) => {
                error!("Failed to update {} '{}': {}", kind, id, e);
                self.failure(ResponseCode::Error, messages::error_on_update(kind, id))
            }
        }
    }

    async fn delete(&self, id: &str) -> AppResult<Envelope<C::Response>> {
        Self::require(id)?;
        let kind = Self::kind();

        let existing = match self.store.find_by_id(id).await {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                info!("No {} found with ID: '{}'", kind, id);
                return self.failure(ResponseCode::NotFound, messages::not_found_id(kind, id));
            }
            Err(e) => {
                error!("Failed to retrieve {} '{}' for deletion: {}", kind, id, e);
                return self.failure(ResponseCode::Error, messages::error_on_deletion_id(kind, id));
            }
        };

        match self.store.delete_by_id(id).await {
            Ok(true) => {
                info!("Deleted {} with ID: '{}'", kind, id);
                self.notify_deleted(&existing);
                Ok(Envelope::acknowledged(messages::deleted(kind, id)))
            }
            Ok(false) => {
                info!("{} '{}' disappeared before deletion", kind, id);
                self.failure(ResponseCode::NotFound, messages::not_found_id(kind, id))
            }
            Err(e) => {
                error!("Failed to delete {} '{}': {}", kind, id, e);
                self.failure(ResponseCode::Error, messages::error_on_deletion_id(kind, id))
            }
        }
    }

    async fn delete_all(&self) -> AppResult<Envelope<C::Response>> {
        let kind = Self::kind();

        match self.store.delete_all().await {
            Ok(count) => {
                info!("Deleted {} {}", count, kind.plural());
                for hook in &self.hooks {
                    hook.after_delete_all(kind, count);
                }
                Ok(Envelope::acknowledged(messages::deleted_all(kind, count)))
            }
            Err(e) => {
                error!("Failed to delete collection of {}: {}", kind.plural(), e);
                self.failure(ResponseCode::Error, messages::error_on_deletion_many(kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{Duration, Utc};

    use domain::messages::SUCCESS;
    use domain::{System, Timestamps};

    use crate::converters::SystemConverter;
    use crate::repository::MockEntityStore;
    use crate::validators::SystemValidator;

    fn request(name: &str) -> SystemRequest {
        SystemRequest {
            name: name.to_string(),
            organization: "Acme".to_string(),
            ..Default::default()
        }
    }

    fn stored(id: &str, name: &str) -> System {
        let mut record = SystemConverter.to_entity(&request(name), Some(id));
        record.timestamps = Timestamps {
            creation_date: Some(Utc::now() - Duration::days(3)),
            latest_update_date: Some(Utc::now() - Duration::days(1)),
        };
        record
    }

    fn gateway(store: MockEntityStore<System>) -> EntityGateway<SystemConverter> {
        EntityGateway::new(Arc::new(store), Arc::new(SystemValidator), SystemConverter)
    }

    #[derive(Default)]
    struct RecordingHook {
        saved: Mutex<Vec<String>>,
        deleted: Mutex<Vec<Value>>,
    }

    impl PersistenceHook for RecordingHook {
        fn after_save(&self, _kind: EntityKind, id: &str) {
            self.saved.lock().unwrap().push(id.to_string());
        }

        fn after_delete(&self, _kind: EntityKind, record: &Value) {
            self.deleted.lock().unwrap().push(record.clone());
        }
    }

    #[tokio::test]
    async fn test_retrieve_by_id_missing_is_not_found() {
        let mut store = MockEntityStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let envelope = gateway(store).retrieve_by_id("missing-1").await.unwrap();

        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert_eq!(
            envelope.message(),
            "Failed to retrieve any System entities from the database with ID: 'missing-1'."
        );
        assert!(envelope.response().is_none());
    }

    #[tokio::test]
    async fn test_blank_identifier_rejected_before_storage() {
        let store = MockEntityStore::new();
        let gateway = gateway(store);

        assert!(matches!(
            gateway.retrieve_by_id("  ").await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            gateway.retrieve_by_name("").await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            gateway.update(request("Sensor-A"), "").await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            gateway.delete("").await,
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected() {
        let store = MockEntityStore::new();
        assert!(matches!(
            gateway(store).retrieve_all(0, 0).await,
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_becomes_error_envelope() {
        let mut store = MockEntityStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(AppError::internal("connection refused")));

        let envelope = gateway(store).retrieve_by_id("abc").await.unwrap();

        assert_eq!(envelope.code(), ResponseCode::Error);
        assert_eq!(
            envelope.message(),
            "Error detected while attempting to retrieve System with ID: 'abc'."
        );
    }

    #[tokio::test]
    async fn test_page_size_capped_and_paging_messages() {
        let mut store = MockEntityStore::new();
        store.expect_count().returning(|| Ok(250));
        store.expect_find_page().never();

        let envelope = gateway(store).retrieve_all(5, 1000).await.unwrap();
        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert_eq!(
            envelope.message(),
            "Failed to retrieve any System entities because page limit has been exceeded. Total Pages: 3"
        );

        let mut store = MockEntityStore::new();
        store.expect_count().returning(|| Ok(0));
        store.expect_find_page().never();

        let envelope = gateway(store).retrieve_all(0, 10).await.unwrap();
        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert_eq!(
            envelope.message(),
            "Failed to retrieve any System entities from the database."
        );
    }

    #[tokio::test]
    async fn test_huge_page_never_reaches_store() {
        let mut store = MockEntityStore::new();
        store.expect_count().times(1).returning(|| Ok(1));
        store.expect_find_page().never();

        let envelope = gateway(store)
            .retrieve_all(u64::MAX / 10, 100)
            .await
            .unwrap();

        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert_eq!(
            envelope.message(),
            "Failed to retrieve any System entities because page limit has been exceeded. Total Pages: 1"
        );
    }

    #[tokio::test]
    async fn test_count_failure_becomes_error_envelope() {
        let mut store = MockEntityStore::new();
        store
            .expect_count()
            .returning(|| Err(AppError::internal("connection reset")));
        store.expect_find_page().never();

        let envelope = gateway(store).retrieve_all(0, 10).await.unwrap();
        assert_eq!(envelope.code(), ResponseCode::Error);
    }

    #[tokio::test]
    async fn test_retrieve_all_attaches_pagination() {
        let mut store = MockEntityStore::new();
        store.expect_count().returning(|| Ok(12));
        store
            .expect_find_page()
            .withf(|request| request.page == 1 && request.size == 2)
            .returning(|_| Ok(vec![stored("a", "one"), stored("b", "two")]));

        let envelope = gateway(store).retrieve_all(1, 2).await.unwrap();

        assert_eq!(envelope.code(), ResponseCode::Success);
        assert_eq!(envelope.list_of_responses().unwrap().len(), 2);
        let pagination = envelope.pagination_info().unwrap();
        assert_eq!(pagination.total_items(), 12);
        assert_eq!(pagination.total_pages(), 6);
        assert_eq!(pagination.current_page(), 1);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_notifies_hooks() {
        let mut store = MockEntityStore::new();
        store.expect_save().times(1).returning(|mut record: System| {
            record.timestamps.touch(Utc::now());
            Ok(record)
        });

        let hook = Arc::new(RecordingHook::default());
        let gateway = gateway(store).with_hook(hook.clone());

        let envelope = gateway.create(request("Sensor-A")).await.unwrap();

        assert_eq!(envelope.code(), ResponseCode::Success);
        assert_eq!(envelope.message(), SUCCESS);
        let created = envelope.into_response().unwrap();
        assert!(!created.id.is_empty());
        assert!(created.creation_date.is_some());
        assert_eq!(hook.saved.lock().unwrap().as_slice(), &[created.id.clone()]);
    }

    #[tokio::test]
    async fn test_create_rejected_by_validator() {
        let mut store = MockEntityStore::new();
        store.expect_save().never();

        let result = gateway(store).create(request("")).await;

        match result {
            Err(AppError::Validation(message)) => {
                assert!(message.ends_with("Field(s): [name]"))
            }
            other => panic!("unexpected outcome: {:?}", other.map(|e| e.code())),
        }
    }

    #[tokio::test]
    async fn test_update_preserves_creation_date() {
        let existing = stored("system-1", "Sensor-A");
        let created_at = existing.timestamps.creation_date;

        let mut store = MockEntityStore::new();
        store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        store.expect_save().returning(|mut record: System| {
            record.timestamps.touch(Utc::now());
            Ok(record)
        });

        let envelope = gateway(store)
            .update(request("Sensor-B"), "system-1")
            .await
            .unwrap();

        let updated = envelope.into_response().unwrap();
        assert_eq!(updated.id, "system-1");
        assert_eq!(updated.name, "Sensor-B");
        assert_eq!(updated.creation_date, created_at);
        assert!(updated.latest_update_date > created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut store = MockEntityStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_save().never();

        let envelope = gateway(store)
            .update(request("Sensor-A"), "missing-1")
            .await
            .unwrap();
        assert_eq!(envelope.code(), ResponseCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_missing_does_not_mutate() {
        let mut store = MockEntityStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_delete_by_id().never();

        let envelope = gateway(store).delete("missing-1").await.unwrap();

        assert_eq!(envelope.code(), ResponseCode::NotFound);
        assert!(!envelope.message().is_empty());
    }

    #[tokio::test]
    async fn test_delete_hands_raw_record_to_hooks() {
        let existing = stored("system-1", "Sensor-A");

        let mut store = MockEntityStore::new();
        store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        store.expect_delete_by_id().times(1).returning(|_| Ok(true));

        let hook = Arc::new(RecordingHook::default());
        let envelope = gateway(store)
            .with_hook(hook.clone())
            .delete("system-1")
            .await
            .unwrap();

        assert_eq!(envelope.code(), ResponseCode::Success);
        assert!(envelope.response().is_none());
        let deleted = hook.deleted.lock().unwrap();
        assert_eq!(deleted[0]["_id"], "system-1");
        assert_eq!(deleted[0]["name"], "Sensor-A");
        assert!(deleted[0]["creationDate"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_store_succeeds() {
        let mut store = MockEntityStore::new();
        store.expect_delete_all().times(1).returning(|| Ok(0));

        let envelope = gateway(store).delete_all().await.unwrap();
        assert_eq!(envelope.code(), ResponseCode::Success);
    }
}
