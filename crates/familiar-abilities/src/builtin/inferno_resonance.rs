//! Inferno Resonance - fire damage multiplier

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{Ability, AbilityError, Cast, Result};

const FACTOR: i64 = 3;

/// Resonance enchantment that amplifies ambient fire energy,
/// multiplying the power of a fire spell by a factor of 3.
pub struct InfernoResonance;

#[derive(Debug, Deserialize)]
struct InfernoParams {
    base_fire_damage: i64,
}

#[async_trait]
impl Ability for InfernoResonance {
    fn name(&self) -> &str {
        "inferno_resonance"
    }

    fn description(&self) -> &str {
        "Amplify ambient fire energy, multiplying a fire spell's power by 3"
    }

    async fn cast(&self, params: Value) -> Result<Cast> {
        let params: InfernoParams = serde_json::from_value(params)
            .map_err(|e| AbilityError::invalid_params(e.to_string()))?;

        let final_damage = params.base_fire_damage * FACTOR;

        Ok(Cast::new(
            self.name(),
            final_damage,
            format!(
                "The Forge roars to life! The fire spell's power is multiplied \
                 by Inferno Resonance, now charged to deal {} damage.",
                final_damage
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_multiplies_by_three() {
        let ability = InfernoResonance;
        let params = serde_json::json!({ "base_fire_damage": 40 });

        let cast = ability.cast(params).await.unwrap();
        assert_eq!(cast.damage_points, 120);
        assert!(cast.message.contains("120"));
    }

    #[tokio::test]
    async fn test_missing_params() {
        let ability = InfernoResonance;
        let result = ability.cast(serde_json::json!({})).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AbilityError::InvalidParameters(_)
        ));
    }
}
