use serde::{Deserialize, Serialize};

/// Bakery transfer form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bakery {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Bakery creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBakery {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl From<models::bakery::Model> for Bakery {
    fn from(m: models::bakery::Model) -> Self {
        Self { id: m.id, name: m.name, address: m.address }
    }
}
