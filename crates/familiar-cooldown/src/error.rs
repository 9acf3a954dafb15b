//! Error types for cooldown tracking

/// Result type for cooldown operations
pub type Result<T> = std::result::Result<T, CooldownError>;

/// Errors that can occur while reading or writing cooldown records
///
/// None of these ever reach a familiar's invocation path: the gate
/// collapses every store failure into an `Allowed` decision.
#[derive(Debug, thiserror::Error)]
pub enum CooldownError {
    /// The store could not be reached (connection refused, timeout, non-2xx)
    #[error("Cooldown store unreachable: {0}")]
    StoreUnreachable(String),

    /// A stored timestamp could not be parsed
    #[error("Malformed cooldown record for '{familiar}': {value}")]
    MalformedRecord { familiar: String, value: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CooldownError {
    /// Create a store-unreachable error
    pub fn unreachable<S: Into<String>>(msg: S) -> Self {
        Self::StoreUnreachable(msg.into())
    }

    /// Create a malformed-record error
    pub fn malformed<F: Into<String>, V: Into<String>>(familiar: F, value: V) -> Self {
        Self::MalformedRecord {
            familiar: familiar.into(),
            value: value.into(),
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_error() {
        let err = CooldownError::unreachable("connection refused");
        assert!(matches!(err, CooldownError::StoreUnreachable(_)));
        assert_eq!(
            err.to_string(),
            "Cooldown store unreachable: connection refused"
        );
    }

    #[test]
    fn test_malformed_error() {
        let err = CooldownError::malformed("fire", "not-a-timestamp");
        assert!(matches!(err, CooldownError::MalformedRecord { .. }));
        assert_eq!(
            err.to_string(),
            "Malformed cooldown record for 'fire': not-a-timestamp"
        );
    }

    #[test]
    fn test_storage_error() {
        let err = CooldownError::storage("map poisoned");
        assert!(matches!(err, CooldownError::Storage(_)));
    }
}
