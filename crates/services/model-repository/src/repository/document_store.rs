//! MongoDB implementation of [`EntityStore`].

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use common::{AppError, AppResult};
use domain::messages::INVALID_PARAMETERS;
use domain::{PageRequest, Record, DOCUMENT_ID_FIELD};

use super::EntityStore;

/// One collection per entity type, named after [`Record::COLLECTION`].
pub struct DocumentStore<T: Record> {
    collection: Collection<T>,
}

impl<T: Record> DocumentStore<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<T>(T::COLLECTION),
        }
    }

    fn oldest_first() -> Document {
        doc! { "creationDate": 1, DOCUMENT_ID_FIELD: 1 }
    }

    fn by_id(id: &str) -> Document {
        doc! { DOCUMENT_ID_FIELD: id }
    }

    /// Skip and limit for a page; the server rejects skips above `i64::MAX`.
    fn window(request: PageRequest) -> AppResult<(u64, i64)> {
        let skip = request
            .offset()
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::invalid_argument(INVALID_PARAMETERS))?;
        let limit = i64::try_from(request.size)
            .map_err(|_| AppError::invalid_argument(INVALID_PARAMETERS))?;
        Ok((skip, limit))
    }
}

#[async_trait]
impl<T: Record> EntityStore<T> for DocumentStore<T> {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let record = self
            .collection
            .find_one(Self::by_id(id))
            .await?;

        Ok(record)
    }

    async fn find_first_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let record = self
            .collection
            .find_one(doc! { "name": name })
            .sort(Self::oldest_first())
            .await?;

        Ok(record)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_page(&self, request: PageRequest) -> AppResult<Vec<T>> {
        let (skip, limit) = Self::window(request)?;

        let records: Vec<T> = self
            .collection
            .find(doc! {})
            .sort(Self::oldest_first())
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(records)
    }

    async fn save(&self, mut record: T) -> AppResult<T> {
        record.timestamps_mut().touch(Utc::now());

        self.collection
            .replace_one(Self::by_id(record.id()), &record)
            .upsert(true)
            .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(Self::by_id(id))
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
