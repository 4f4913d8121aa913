use thiserror::Error;

pub mod types;
pub mod utils;
pub mod directory;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("upstream returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn core_error_messages_name_the_cause() {
        assert_eq!(CoreError::Status(503).to_string(), "upstream returned status 503");
        assert_eq!(CoreError::Network("refused".into()).to_string(), "network error: refused");
    }
}
