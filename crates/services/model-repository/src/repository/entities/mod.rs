//! SeaORM entities backing the relational store.
//!
//! Embedded objects (locations, attributes, parameters) are stored as JSON
//! columns so a row holds the same document the MongoDB collections do.

pub mod asset_category;
pub mod system;
pub mod vendor;

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as Json;

use common::AppResult;
use domain::Record;

/// Column type of every entity's primary key, name and creation date.
pub type ColumnOf<T> = <<T as TableMapping>::Entity as EntityTrait>::Column;

/// Maps a domain record onto its table.
pub trait TableMapping: Record {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    fn id_column() -> ColumnOf<Self>;
    fn name_column() -> ColumnOf<Self>;
    fn creation_date_column() -> ColumnOf<Self>;

    /// Rebuild the record from a row
    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> AppResult<Self>;

    /// Every column set, ready for insert or full update
    fn to_active_model(&self) -> AppResult<Self::ActiveModel>;
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> AppResult<Json> {
    Ok(serde_json::to_value(value)?)
}

pub(crate) fn from_json<T: DeserializeOwned>(value: Json) -> AppResult<T> {
    Ok(serde_json::from_value(value)?)
}
