//! Client module: three-layer architecture (domain, repository, service).
//!
//! Reconciles locally stored clients with the external user directory.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ClientService;
