use std::fmt::Display;

use common::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("bakery not found: {0}")]
    AssociationNotFound(i32),
    #[error("directory unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} not found: {}", entity, id)) }

    pub fn db(e: impl Display) -> Self { Self::Db(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 2001,
            ServiceError::NotFound(_) => 2002,
            ServiceError::AssociationNotFound(_) => 2003,
            ServiceError::UpstreamUnavailable(_) => 2101,
            ServiceError::Db(_) => 2200,
            ServiceError::Model(_) => 2201,
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(e: CoreError) -> Self { Self::UpstreamUnavailable(e.to_string()) }
}
