use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Unknown node: {0}")]
    UnknownNode(usize),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Config("root_id must not be empty".into()).to_string(),
            "Configuration error: root_id must not be empty"
        );
        assert_eq!(AppError::UnknownNode(7).to_string(), "Unknown node: 7");
    }

    #[test]
    fn test_serde_error_converts() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
