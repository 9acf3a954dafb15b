//! Ability Casting Example
//!
//! Registers the built-in abilities and casts each kind.
//!
//! Run with:
//! ```bash
//! cargo run -p familiar-abilities --example cast_demo
//! ```

use familiar_abilities::{base_damage, builtin, AbilityRegistry};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔮 Ability Casting Demo\n");

    let registry = AbilityRegistry::new();
    builtin::register_builtins(&registry)?;

    println!("Registered abilities: {:?}\n", registry.list_abilities());

    // A forge multiplier, fed from the grimoire's base damage
    let base = base_damage("inferno_lash").unwrap();
    let cast = registry
        .cast("inferno_resonance", json!({ "base_fire_damage": base }))
        .await?;
    println!("{}", cast.message);

    // An accumulator: two charges in a row
    let cast = registry
        .cast("seismic_charge", json!({ "current_energy": 1 }))
        .await?;
    println!("{}", cast.message);

    let cast = registry
        .cast("seismic_charge", json!({ "current_energy": cast.damage_points }))
        .await?;
    println!("{}", cast.message);

    // A fixed-power external spell
    let cast = registry.cast("cryosea_shatter", json!({})).await?;
    println!("{}", cast.message);

    println!("\n✅ Demo complete");

    Ok(())
}
