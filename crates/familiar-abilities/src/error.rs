//! Error types for ability casting

/// Result type for ability operations
pub type Result<T> = std::result::Result<T, AbilityError>;

/// Errors that can occur while registering or casting abilities
#[derive(Debug, thiserror::Error)]
pub enum AbilityError {
    /// Ability not found
    #[error("Ability not found: {0}")]
    NotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Ability execution failed
    #[error("Ability cast failed: {0}")]
    CastFailed(String),

    /// Ability already registered
    #[error("Ability already registered: {0}")]
    AlreadyRegistered(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AbilityError {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(ability: S) -> Self {
        Self::NotFound(ability.into())
    }

    /// Create an invalid parameters error
    pub fn invalid_params<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create a cast failed error
    pub fn cast_failed<S: Into<String>>(msg: S) -> Self {
        Self::CastFailed(msg.into())
    }
}
