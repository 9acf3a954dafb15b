//! Ability trait definition

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Outcome of casting an ability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    /// Name of the ability that was cast
    pub ability: String,

    /// Damage (or charge) the cast resolved to
    pub damage_points: i64,

    /// Thematic message describing the cast, suitable for surfacing as-is
    pub message: String,
}

impl Cast {
    /// Create a cast outcome
    pub fn new<A: Into<String>, M: Into<String>>(ability: A, damage_points: i64, message: M) -> Self {
        Self {
            ability: ability.into(),
            damage_points,
            message: message.into(),
        }
    }
}

/// Trait for abilities familiars can cast
///
/// Abilities are stateless damage formulas: every cast computes its result
/// from the supplied parameters alone.
#[async_trait]
pub trait Ability: Send + Sync {
    /// The ability's unique name
    fn name(&self) -> &str;

    /// Human-readable description of what the ability does
    fn description(&self) -> &str;

    /// Cast the ability with the given parameters
    ///
    /// # Arguments
    /// * `params` - JSON value containing the ability parameters; abilities
    ///   that take no parameters ignore it
    ///
    /// # Returns
    /// The resolved [`Cast`] or an error for unusable parameters
    async fn cast(&self, params: Value) -> Result<Cast>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_creation() {
        let cast = Cast::new("emberstorm", 37, "Embers rain from the sky.");
        assert_eq!(cast.ability, "emberstorm");
        assert_eq!(cast.damage_points, 37);
    }

    #[test]
    fn test_cast_serialization() {
        let cast = Cast::new("inferno_lash", 40, "A whip of flame cracks.");
        let json = serde_json::to_string(&cast).unwrap();
        let deserialized: Cast = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.ability, "inferno_lash");
        assert_eq!(deserialized.damage_points, 40);
    }
}
