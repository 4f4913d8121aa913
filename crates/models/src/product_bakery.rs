use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bakery, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_bakery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub bakery_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product, Bakery }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
            Relation::Bakery => Entity::belongs_to(bakery::Entity).from(Column::BakeryId).to(bakery::Column::Id).into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<bakery::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bakery.def() }
}

impl ActiveModelBehavior for ActiveModel {}
