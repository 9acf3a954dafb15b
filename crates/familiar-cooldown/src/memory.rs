//! In-memory cooldown storage using DashMap

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::{store::CooldownStore, Result};

/// In-memory cooldown store using a concurrent HashMap
///
/// Records live for the process lifetime; there is no TTL eviction. A
/// record older than the cooldown window is semantically irrelevant but
/// stays in the map until overwritten.
///
/// # Example
///
/// ```
/// use familiar_cooldown::{CooldownStore, InMemoryStore};
/// use chrono::Utc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     store.record_activation("fire", Utc::now()).await?;
///     let last = store.last_activation("fire").await?;
///     assert!(last.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    /// Concurrent map from familiar name to last activation instant
    records: Arc<DashMap<String, DateTime<Utc>>>,
}

impl InMemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Get the current number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records
    pub fn clear(&self) {
        let count = self.records.len();
        self.records.clear();
        tracing::info!("Cleared {} cooldown records", count);
    }
}

#[async_trait]
impl CooldownStore for InMemoryStore {
    async fn last_activation(&self, familiar: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.records.get(familiar).map(|entry| *entry.value()))
    }

    async fn record_activation(&self, familiar: &str, at: DateTime<Utc>) -> Result<()> {
        self.records.insert(familiar.to_string(), at);
        tracing::debug!("Recorded activation for {} at {}", familiar, at);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
