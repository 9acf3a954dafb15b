//! Shared application state

use anyhow::Result;
use dashmap::DashMap;
use familiar_abilities::{builtin, AbilityRegistry};
use std::sync::Arc;

/// State shared by all Nexus handlers
#[derive(Clone)]
pub struct AppState {
    /// Cooldown records: familiar name → raw timestamp string as POSTed.
    /// Stored unparsed so GET echoes exactly what was written.
    pub cooldowns: Arc<DashMap<String, String>>,

    /// Castable abilities
    pub abilities: Arc<AbilityRegistry>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let abilities = AbilityRegistry::new();
        builtin::register_builtins(&abilities)?;

        Ok(Self {
            cooldowns: Arc::new(DashMap::new()),
            abilities: Arc::new(abilities),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_has_builtins() {
        let state = AppState::new().unwrap();
        assert_eq!(state.abilities.count(), 5);
        assert!(state.cooldowns.is_empty());
    }
}
