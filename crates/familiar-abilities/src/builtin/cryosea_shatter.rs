//! Cryosea Shatter - fixed-power ice spell

use async_trait::async_trait;
use serde_json::Value;

use crate::{Ability, Cast, Result};

const DAMAGE: i64 = 20;

/// A powerful ice spell drawn from an external source; always resolves
/// to the same damage. Takes no parameters.
pub struct CryoseaShatter;

#[async_trait]
impl Ability for CryoseaShatter {
    fn name(&self) -> &str {
        "cryosea_shatter"
    }

    fn description(&self) -> &str {
        "Shatter a shard of the frozen sea over the target for 20 damage"
    }

    async fn cast(&self, _params: Value) -> Result<Cast> {
        Ok(Cast::new(
            self.name(),
            DAMAGE,
            format!(
                "A shard of the frozen sea shatters over the target, \
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
        let ability = CryoseaShatter;
        let cast = ability.cast(serde_json::json!({})).await.unwrap();
        assert_eq!(cast.damage_points, 20);
    }

    #[tokio::test]
    async fn test_ignores_params() {
        let ability = CryoseaShatter;
        let cast = ability
            .cast(serde_json::json!({ "anything": "goes" }))
            .await
            .unwrap();
        assert_eq!(cast.damage_points, 20);
    }
}
