//! Vendor database entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::AppResult;
use domain::{Timestamps, Vendor};

use super::TableMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub creation_date: DateTimeUtc,
    pub latest_update_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TableMapping for Vendor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn name_column() -> Column {
        Column::Name
    }

    fn creation_date_column() -> Column {
        Column::CreationDate
    }

    fn from_model(model: Model) -> AppResult<Self> {
        Ok(Vendor {
            id: model.id,
            name: model.name,
            description: model.description,
            timestamps: Timestamps {
                creation_date: Some(model.creation_date),
                latest_update_date: Some(model.latest_update_date),
            },
        })
    }

    fn to_active_model(&self) -> AppResult<ActiveModel> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: Set(self.id.clone()),
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            creation_date: Set(self.timestamps.creation_date.unwrap_or(now)),
            latest_update_date: Set(self.timestamps.latest_update_date.unwrap_or(now)),
        })
    }
}
