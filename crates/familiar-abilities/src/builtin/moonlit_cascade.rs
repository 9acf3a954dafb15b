//! Moonlit Cascade - fixed-power arcane spell

use async_trait::async_trait;
use serde_json::Value;

use crate::{Ability, Cast, Result};

const DAMAGE: i64 = 25;

/// A mystical arcane spell drawn from an external source; always resolves
/// to the same damage. Takes no parameters.
pub struct MoonlitCascade;

#[async_trait]
impl Ability for MoonlitCascade {
    fn name(&self) -> &str {
        "moonlit_cascade"
    }

    fn description(&self) -> &str {
        "Cascade moonlit arcana over the target for 25 damage"
    }

    async fn cast(&self, _params: Value) -> Result<Cast> {
        Ok(Cast::new(
            self.name(),
            DAMAGE,
            format!(
                "Moonlight pours down in a cascade of arcana, \
                 striking for {} damage.",
                DAMAGE
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_damage() {
        let ability = MoonlitCascade;
        let cast = ability.cast(serde_json::json!({})).await.unwrap();
        assert_eq!(cast.damage_points, 25);
    }
}
