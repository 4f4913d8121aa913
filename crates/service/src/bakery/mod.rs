//! Bakery module: lookups used by the client and product services, plus the
//! minimal create/list/get surface needed to seed the network.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::BakeryService;
