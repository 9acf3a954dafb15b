//! Cooldown store trait definition

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::Result;

/// Trait for cooldown storage backends
///
/// A store maps a familiar's name to the instant of its last activation.
/// Implementations provide different placements for that map:
/// - In-memory for tests and for the authoritative server-side map
/// - HTTP for consulting a remote store service
///
/// Writes are last-writer-wins; the store never arbitrates between racing
/// callers.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// Read the last activation instant for a familiar
    ///
    /// # Arguments
    /// * `familiar` - Name of the rate-limited familiar
    ///
    /// # Returns
    /// `Ok(Some(instant))` if a record exists, `Ok(None)` if the familiar
    /// has never activated. Absence is a normal result, not an error.
    async fn last_activation(&self, familiar: &str) -> Result<Option<DateTime<Utc>>>;

    /// Record an activation instant for a familiar
    ///
    /// Unconditionally overwrites (or inserts) the record; subsequent
    /// `last_activation` calls observe the new value.
    async fn record_activation(&self, familiar: &str, at: DateTime<Utc>) -> Result<()>;

    /// Get the name of this store (for debugging/logging)
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock store for testing
    struct MockStore;

    #[async_trait]
    impl CooldownStore for MockStore {
        async fn last_activation(&self, _familiar: &str) -> Result<Option<DateTime<Utc>>> {
            Ok(None)
        }

        async fn record_activation(&self, _familiar: &str, _at: DateTime<Utc>) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_mock_store() {
        let store = MockStore;
        assert_eq!(store.name(), "mock");

        let last = store.last_activation("fire").await.unwrap();
        assert!(last.is_none());

        let result = store.record_activation("fire", Utc::now()).await;
        assert!(result.is_ok());
    }
}
