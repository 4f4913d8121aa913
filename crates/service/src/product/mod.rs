//! Product module: catalog entries, their bakery set and stock accumulation.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ProductService;
