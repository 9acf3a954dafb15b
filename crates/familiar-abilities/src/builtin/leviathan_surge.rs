//! Leviathan Surge - water damage multiplier

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{Ability, AbilityError, Cast, Result};

// The canonical factor is 3, not the 2 the old lore text claimed.
const FACTOR: i64 = 3;

/// Surge of raw water magic channeled through the Forge,
/// multiplying the power of a water-based attack.
pub struct LeviathanSurge;

#[derive(Debug, Deserialize)]
struct SurgeParams {
    base_water_damage: i64,
}

#[async_trait]
impl Ability for LeviathanSurge {
    fn name(&self) -> &str {
        "leviathan_surge"
    }

    fn description(&self) -> &str {
        "Channel raw water magic, multiplying a water attack's power by 3"
    }

    async fn cast(&self, params: Value) -> Result<Cast> {
        let params: SurgeParams = serde_json::from_value(params)
            .map_err(|e| AbilityError::invalid_params(e.to_string()))?;

        let final_damage = params.base_water_damage * FACTOR;

        Ok(Cast::new(
            self.name(),
            final_damage,
            format!(
                "A torrent of power surges from the Forge! The water spell is \
                 magnified, now ready to strike for {} damage.",
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
        let ability = LeviathanSurge;
        let params = serde_json::json!({ "base_water_damage": 20 });

        let cast = ability.cast(params).await.unwrap();
        assert_eq!(cast.damage_points, 60);
    }

    #[tokio::test]
    async fn test_wrong_param_name() {
        let ability = LeviathanSurge;
        let params = serde_json::json!({ "base_fire_damage": 20 });

        let result = ability.cast(params).await;
        assert!(result.is_err());
    }
}
