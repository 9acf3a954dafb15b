//! Error types shared across the familiar runtime

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, FamiliarError>;

/// Base error type for the familiar runtime
#[derive(Debug, thiserror::Error)]
pub enum FamiliarError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl FamiliarError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = FamiliarError::config("missing store URL");
        assert!(matches!(err, FamiliarError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: missing store URL");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FamiliarError::from(io_err);
        assert!(matches!(err, FamiliarError::Io(_)));
    }

    #[test]
    fn test_result_alias() {
        fn returns_result() -> Result<u64> {
            Ok(60)
        }

        assert_eq!(returns_result().unwrap(), 60);
    }
}
