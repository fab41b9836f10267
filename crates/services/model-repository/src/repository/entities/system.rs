//! System database entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::AppResult;
use domain::{System, Timestamps};

use super::{from_json, to_json, TableMapping};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "systems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Embedded Location document
    pub location: Json,
    pub organization: String,
    pub additional_information: Json,
    /// Embedded KvAttribute documents
    pub attributes: Json,
    pub creation_date: DateTimeUtc,
    pub latest_update_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TableMapping for System {
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
        Ok(System {
            id: model.id,
            name: model.name,
            description: model.description,
            location: from_json(model.location)?,
            organization: model.organization,
            additional_information: from_json(model.additional_information)?,
            attributes: from_json(model.attributes)?,
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
            location: Set(to_json(&self.location)?),
            organization: Set(self.organization.clone()),
            additional_information: Set(to_json(&self.additional_information)?),
            attributes: Set(to_json(&self.attributes)?),
            creation_date: Set(self.timestamps.creation_date.unwrap_or(now)),
            latest_update_date: Set(self.timestamps.latest_update_date.unwrap_or(now)),
        })
    }
}
