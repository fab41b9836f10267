//! SeaORM implementation of [`EntityStore`].

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use common::{AppError, AppResult};
use domain::messages::INVALID_PARAMETERS;
use domain::PageRequest;

use super::entities::TableMapping;
use super::EntityStore;

/// Generic table-backed store; the table comes from the record's [`TableMapping`].
pub struct RelationalStore<T> {
    db: DatabaseConnection,
    _record: PhantomData<fn() -> T>,
}

impl<T> RelationalStore<T> {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T> EntityStore<T> for RelationalStore<T>
where
    T: TableMapping,
    <T::Entity as EntityTrait>::Model: IntoActiveModel<T::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let model = <T::Entity as EntityTrait>::find()
            .filter(T::id_column().eq(id))
            .one(&self.db)
            .await?;

        model.map(T::from_model).transpose()
    }

    async fn find_first_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let model = <T::Entity as EntityTrait>::find()
            .filter(T::name_column().eq(name))
            .order_by_asc(T::creation_date_column())
            .order_by_asc(T::id_column())
            .one(&self.db)
            .await?;

        model.map(T::from_model).transpose()
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(<T::Entity as EntityTrait>::find().count(&self.db).await?)
    }

    async fn find_page(&self, request: PageRequest) -> AppResult<Vec<T>> {
        let offset = request
            .offset()
            .ok_or_else(|| AppError::invalid_argument(INVALID_PARAMETERS))?;

        let models = <T::Entity as EntityTrait>::find()
            .order_by_asc(T::creation_date_column())
            .order_by_asc(T::id_column())
            .offset(offset)
            .limit(request.size)
            .all(&self.db)
            .await?;

        models.into_iter().map(T::from_model).collect()
    }

    async fn save(&self, mut record: T) -> AppResult<T> {
        record.timestamps_mut().touch(Utc::now());

        let exists = <T::Entity as EntityTrait>::find()
            .filter(T::id_column().eq(record.id()))
            .count(&self.db)
            .await?
            > 0;

        let active = record.to_active_model()?;
        let model = if exists {
            active.update(&self.db).await?
        } else {
            active.insert(&self.db).await?
        };

        T::from_model(model)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = <T::Entity as EntityTrait>::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = <T::Entity as EntityTrait>::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
