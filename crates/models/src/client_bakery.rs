use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bakery, client};

/// Join row: "this client is associated with this bakery".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_bakery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub bakery_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Client, Bakery }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity).from(Column::ClientId).to(client::Column::Id).into(),
            Relation::Bakery => Entity::belongs_to(bakery::Entity).from(Column::BakeryId).to(bakery::Column::Id).into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}
