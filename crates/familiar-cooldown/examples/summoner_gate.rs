//! Summoner-Side Gate Example
//!
//! Plays the role of a summoner process: loads the cooldown settings,
//! then consults the gate before each familiar acts. Expects a Nexus
//! server at the configured store URL.
//!
//! Run with:
//! ```bash
//! cargo run -p familiar-server &
//! cargo run -p familiar-cooldown --example summoner_gate
//! ```

use familiar_core::{init_logging, load_config_or_default};
use familiar_cooldown::{CooldownGate, HttpStore};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = load_config_or_default("familiar.toml");
    init_logging(&config.logging);

    let store = Arc::new(HttpStore::new(&config.cooldown.store_url));
    let gate = CooldownGate::new(store, Duration::from_secs(config.cooldown.window_secs));

    for familiar in ["fire", "water", "earth", "fire"] {
        match gate.check_and_refresh(familiar).await {
            decision if decision.is_allowed() => {
                println!("⚔️  Summoning the {} familiar!", familiar);
            }
            decision => {
                println!(
                    "🛌 The {} familiar is recovering, {}s remaining",
                    familiar,
                    decision.remaining_secs().unwrap_or(0)
                );
            }
        }
    }
}
