use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bakery, errors, product_bakery};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Bakeries,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Bakeries => Entity::has_many(product_bakery::Entity).into() }
    }
}

impl Related<product_bakery::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bakeries.def() }
}

impl Related<bakery::Entity> for Entity {
    fn to() -> RelationDef { product_bakery::Relation::Bakery.def() }
    fn via() -> Option<RelationDef> { Some(product_bakery::Relation::Product.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.len() > 128 { return Err(errors::ModelError::Validation("product name too long (<=128)".into())); }
    Ok(())
}
