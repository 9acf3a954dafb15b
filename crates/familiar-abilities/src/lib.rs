//! Familiar Abilities
//!
//! The ability-casting system: stateless damage formulas registered by
//! name and cast with JSON parameters, plus the static grimoire of base
//! damage values.
//!
//! # Example
//!
//! ```
//! use familiar_abilities::{builtin, AbilityRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = AbilityRegistry::new();
//!     builtin::register_builtins(&registry)?;
//!
//!     let cast = registry
//!         .cast("inferno_resonance", json!({ "base_fire_damage": 40 }))
//!         .await?;
//!     assert_eq!(cast.damage_points, 120);
//!
//!     Ok(())
//! }
//! ```

pub mod ability;
pub mod builtin;
pub mod error;
pub mod grimoire;
pub mod registry;

// Re-exports
pub use ability::{Ability, Cast};
pub use error::{AbilityError, Result};
pub use grimoire::{abilities_of, base_damage, GrimoireEntry, GRIMOIRE};
pub use registry::AbilityRegistry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify main types are accessible
        let registry = AbilityRegistry::new();
        assert_eq!(registry.count(), 0);
        assert_eq!(GRIMOIRE.len(), 8);
    }
}
