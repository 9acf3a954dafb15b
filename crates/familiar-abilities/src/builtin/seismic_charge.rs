//! Seismic Charge - earth energy accumulator

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{Ability, AbilityError, Cast, Result};

const INCREMENT: i64 = 2;

/// Draws raw power from the earth itself, slowly accumulating seismic
/// energy. Each cast increments the current charge by 2 units.
pub struct SeismicCharge;

#[derive(Debug, Deserialize)]
struct ChargeParams {
    current_energy: i64,
}

#[async_trait]
impl Ability for SeismicCharge {
    fn name(&self) -> &str {
        "seismic_charge"
    }

    fn description(&self) -> &str {
        "Accumulate seismic energy, incrementing the current charge by 2 units"
    }

    async fn cast(&self, params: Value) -> Result<Cast> {
        let params: ChargeParams = serde_json::from_value(params)
            .map_err(|e| AbilityError::invalid_params(e.to_string()))?;

        let charged_energy = params.current_energy + INCREMENT;

        Ok(Cast::new(
            self.name(),
            charged_energy,
            format!(
                "The ground trembles as seismic energy is absorbed. The power \
                 charge has accumulated to {} units.",
                charged_energy
            ),
        ))
    }
}
