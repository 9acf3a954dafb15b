//! Ability registry for managing and casting abilities

use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::{ability::Ability, error::AbilityError, Cast, Result};

/// Registry for managing abilities
///
/// Central place to register, look up, and cast abilities by name.
/// Thread-safe and can be shared across async tasks.
#[derive(Clone, Default)]
pub struct AbilityRegistry {
    /// Map of ability name to ability implementation
    abilities: Arc<DashMap<String, Arc<dyn Ability>>>,
}

impl AbilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            abilities: Arc::new(DashMap::new()),
        }
    }

    /// Register an ability
    ///
    /// # Returns
    /// Error if an ability with the same name is already registered
    pub fn register<A: Ability + 'static>(&self, ability: A) -> Result<()> {
        let name = ability.name().to_string();

        if self.abilities.contains_key(&name) {
            return Err(AbilityError::AlreadyRegistered(name));
        }

        self.abilities.insert(name.clone(), Arc::new(ability));
        tracing::debug!("Registered ability: {}", name);
        Ok(())
    }

    /// Check if an ability is registered
    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    /// Get an ability by name
    pub fn get_ability(&self, name: &str) -> Option<Arc<dyn Ability>> {
        self.abilities.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Cast an ability by name
    ///
    /// # Arguments
    /// * `name` - Name of the ability to cast
    /// * `params` - JSON parameters for the ability
    pub async fn cast(&self, name: &str, params: Value) -> Result<Cast> {
        let ability = self
            .get_ability(name)
            .ok_or_else(|| AbilityError::not_found(name))?;

        tracing::info!("Casting {} with params: {}", name, params);

        match ability.cast(params).await {
            Ok(cast) => {
                tracing::debug!("{} resolved to {} damage", name, cast.damage_points);
                Ok(cast)
            }
            Err(e) => {
                tracing::error!("Cast of {} failed: {}", name, e);
                Err(e)
            }
        }
    }

    /// List all registered ability names
    pub fn list_abilities(&self) -> Vec<String> {
        self.abilities.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get the number of registered abilities
    pub fn count(&self) -> usize {
        self.abilities.len()
    }
}
