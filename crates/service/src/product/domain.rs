use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Product transfer form. `bakeryIds` is serialized sorted and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub bakery_ids: BTreeSet<i32>,
}

/// Stored product with its resolved bakery set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub bakery_ids: BTreeSet<i32>,
}

/// Product to insert; `bakery_ids` must already be resolved.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub stock: i32,
    pub bakery_ids: BTreeSet<i32>,
}

impl Product {
    pub fn to_dto(&self) -> ProductDto {
        ProductDto { id: Some(self.id), name: self.name.clone(), stock: self.stock, bakery_ids: self.bakery_ids.clone() }
    }
}
