//! Basic Cooldown Gate Example
//!
//! Demonstrates the gate's decision policy against an in-memory store.
//!
//! Run with:
//! ```bash
//! cargo run -p familiar-cooldown --example gate_basics
//! ```

use chrono::{Duration as ChronoDuration, Utc};
use familiar_cooldown::{CooldownGate, CooldownStore, InMemoryStore};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("⏳ Cooldown Gate Demo\n");

    let store = Arc::new(InMemoryStore::new());
    let gate = CooldownGate::new(store.clone(), Duration::from_secs(60));

    // First summon: no record yet, so the gate allows and records it
    println!("=== First summon ===");
    let decision = gate.check_and_refresh("fire").await;
    println!("fire familiar: allowed = {}", decision.is_allowed());

    // Immediate retry: still cooling down
    println!("\n=== Immediate retry ===");
    let decision = gate.check_and_refresh("fire").await;
    if let Some(secs) = decision.remaining_secs() {
        println!("fire familiar is recovering, {}s remaining", secs);
    }

    // Other familiars are tracked independently
    println!("\n=== Independent familiars ===");
    let decision = gate.check_and_refresh("water").await;
    println!("water familiar: allowed = {}", decision.is_allowed());

    // Backdate the fire record past the window: eligible again
    println!("\n=== After the window ===");
    let long_ago = Utc::now() - ChronoDuration::seconds(61);
    store.record_activation("fire", long_ago).await?;

    let decision = gate.check_and_refresh("fire").await;
    println!("fire familiar: allowed = {}", decision.is_allowed());

    println!("\n✅ Demo complete");

    Ok(())
}
