use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::client_bakery;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BakeryLinks,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::BakeryLinks => Entity::has_many(client_bakery::Entity).into() }
    }
}

impl Related<client_bakery::Entity> for Entity {
    fn to() -> RelationDef { Relation::BakeryLinks.def() }
}

impl ActiveModelBehavior for ActiveModel {}
