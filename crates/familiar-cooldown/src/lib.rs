//! Familiar Cooldown
//!
//! Cooldown tracking for rate-limited familiars: a pluggable store of
//! last-activation instants and the fail-open gate that consults it
//! before a familiar acts.
//!
//! # Example
//!
//! ```no_run
//! use familiar_cooldown::{CooldownGate, HttpStore};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(HttpStore::new("http://127.0.0.1:8080"));
//!     let gate = CooldownGate::new(store, Duration::from_secs(60));
//!
//!     match gate.check_and_refresh("fire").await {
//!         d if d.is_allowed() => println!("Summon the fire familiar!"),
//!         d => println!(
//!             "Fire familiar is recovering, {}s remaining",
//!             d.remaining_secs().unwrap_or(0)
//!         ),
//!     }
//! }
//! ```

pub mod error;
pub mod gate;
pub mod http;
pub mod memory;
pub mod store;

// Re-exports
pub use error::{CooldownError, Result};
pub use gate::{CooldownGate, GateDecision};
pub use http::HttpStore;
pub use memory::InMemoryStore;
pub use store::CooldownStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify main types are accessible
        let store = InMemoryStore::new();
        assert!(store.is_empty());
    }
}
