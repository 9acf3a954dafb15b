//! Built-in abilities

pub mod cryosea_shatter;
pub mod inferno_resonance;
pub mod leviathan_surge;
pub mod moonlit_cascade;
pub mod seismic_charge;

pub use cryosea_shatter::CryoseaShatter;
pub use inferno_resonance::InfernoResonance;
pub use leviathan_surge::LeviathanSurge;
pub use moonlit_cascade::MoonlitCascade;
pub use seismic_charge::SeismicCharge;

use crate::{AbilityRegistry, Result};

/// Register every built-in ability into a registry
pub fn register_builtins(registry: &AbilityRegistry) -> Result<()> {
    registry.register(InfernoResonance)?;
    registry.register(LeviathanSurge)?;
    registry.register(SeismicCharge)?;
    registry.register(CryoseaShatter)?;
    registry.register(MoonlitCascade)?;
    Ok(())
}
