//! Service layer for the bakery catalog.
//! - Client reconciliation across the local store and the external directory.
//! - Product catalog with bakery associations and stock accumulation.
//! - Repository ports with SeaORM and in-memory implementations.

pub mod errors;
pub mod directory;
pub mod bakery;
pub mod client;
pub mod product;
#[cfg(test)]
pub mod test_support;

pub use bakery::BakeryService;
pub use client::ClientService;
pub use product::ProductService;
