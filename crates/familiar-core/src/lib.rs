//! Familiar Core
//!
//! Shared foundation for the familiar runtime: error handling,
//! configuration loading, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, FamiliarConfig};
pub use error::{FamiliarError, Result};
pub use logging::init_logging;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        // Basic smoke test - verify module exports are accessible
        let config = FamiliarConfig::default();
        assert_eq!(config.cooldown.window_secs, 60);
    }
}
