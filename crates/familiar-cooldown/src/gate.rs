//! The cooldown gate
//!
//! Single decision point a familiar's invocation path passes through
//! before acting. The gate consults a [`CooldownStore`] and resolves to an
//! [`Allowed`](GateDecision::Allowed) or
//! [`Denied`](GateDecision::Denied) decision; it never returns an error.
//!
//! Availability beats strictness throughout: an unreachable store, a
//! malformed record, or a failed refresh all resolve toward `Allowed`.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::{store::CooldownStore, CooldownError};

/// Outcome of a gate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The familiar may act; its activation has been recorded
    Allowed,
    /// The familiar is still cooling down
    Denied {
        /// Exact time left until the familiar is eligible again
        remaining: Duration,
    },
}

impl GateDecision {
    /// Whether the familiar may act
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }

    /// Exact remaining cooldown, if denied
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            GateDecision::Allowed => None,
            GateDecision::Denied { remaining } => Some(*remaining),
        }
    }

    /// Remaining cooldown in whole seconds (truncated), if denied
    ///
    /// Truncation matches the store service's own reporting; callers that
    /// prefer to never under-report wait time can round up from
    /// [`remaining`](Self::remaining) instead.
    pub fn remaining_secs(&self) -> Option<u64> {
        self.remaining().map(|r| r.as_secs())
    }
}

/// The cooldown gate
///
/// Holds a store handle and the process-wide cooldown window. One gate
/// serves any number of familiars; records are independent per name.
///
/// # Example
///
/// ```
/// use familiar_cooldown::{CooldownGate, InMemoryStore};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let store = Arc::new(InMemoryStore::new());
///     let gate = CooldownGate::new(store, Duration::from_secs(60));
///
///     let decision = gate.check_and_refresh("fire").await;
///     assert!(decision.is_allowed());
///
///     let decision = gate.check_and_refresh("fire").await;
///     assert!(!decision.is_allowed());
/// }
/// ```
pub struct CooldownGate {
    store: Arc<dyn CooldownStore>,
    window: Duration,
}

impl CooldownGate {
    /// Create a gate over a store with the given cooldown window
    pub fn new(store: Arc<dyn CooldownStore>, window: Duration) -> Self {
        Self { store, window }
    }

    /// The configured cooldown window
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check whether a familiar may act, refreshing its record on allow
    ///
    /// Decision policy:
    /// - Store unreachable on read: fail open — `Allowed`, no refresh
    ///   (the write path may be equally unreachable).
    /// - Malformed stored record: treated as "never activated".
    /// - No prior record: `Allowed`, then refresh with the current instant.
    /// - `elapsed < window`: `Denied` with the remaining time; the stored
    ///   record is left untouched.
    /// - `elapsed >= window`: `Allowed`, then refresh.
    ///
    /// The refresh is attempted only after the decision is finalized; a
    /// refresh failure is logged and swallowed, never surfaced.
    pub async fn check_and_refresh(&self, familiar: &str) -> GateDecision {
        let now = Utc::now();

        let last = match self.store.last_activation(familiar).await {
            Ok(last) => last,
            Err(CooldownError::MalformedRecord { value, .. }) => {
                tracing::warn!(
                    "Unparseable cooldown record for {} ({}), treating as never activated",
                    familiar,
                    value
                );
                None
            }
            Err(e) => {
                // Fail open: an infrastructure outage must never block a
                // legitimate activation.
                tracing::warn!("Cooldown store read failed for {}, failing open: {}", familiar, e);
                return GateDecision::Allowed;
            }
        };

        match last {
            None => {
                tracing::debug!("No cooldown record for {}, allowing", familiar);
                self.refresh(familiar, now).await;
                GateDecision::Allowed
            }
            Some(last) => {
                // A record from the future counts as still cooling for the
                // full window.
                let elapsed = (now - last).to_std().unwrap_or(Duration::ZERO);

                if elapsed < self.window {
                    let remaining = self.window - elapsed;
                    tracing::debug!(
                        "{} is on cooldown, {}s remaining",
                        familiar,
                        remaining.as_secs()
                    );
                    GateDecision::Denied { remaining }
                } else {
                    tracing::debug!("Cooldown elapsed for {}, allowing", familiar);
                    self.refresh(familiar, now).await;
                    GateDecision::Allowed
                }
            }
        }
    }

    /// Record an activation, swallowing failures
    ///
    /// A failed refresh leaves the old timestamp in place, which can only
    /// shorten the next effective cooldown, never lengthen it.
    async fn refresh(&self, familiar: &str, at: DateTime<Utc>) {
        if let Err(e) = self.store.record_activation(familiar, at).await {
            tracing::warn!("Cooldown refresh failed for {}: {}", familiar, e);
        }
    }
}
