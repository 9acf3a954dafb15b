//! HTTP-backed cooldown store client
//!
//! Speaks the Nexus store contract:
//! - `GET {base}/cooldown/{familiar}` → `200 {"time": <ISO-8601|null>}`
//! - `POST {base}/cooldown/{familiar}` with `{"timestamp": <ISO-8601>}` → `204`

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{store::CooldownStore, CooldownError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CooldownStatus {
    time: Option<String>,
}

#[derive(Debug, Serialize)]
struct CooldownUpdate {
    timestamp: String,
}

/// HTTP cooldown store
///
/// Consults a remote store service over the network. Every transport
/// failure (connection refused, timeout, non-2xx) maps to
/// [`CooldownError::StoreUnreachable`]; a stored value that is not a
/// parseable timestamp maps to [`CooldownError::MalformedRecord`].
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Create a new HTTP store with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP store with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn cooldown_url(&self, familiar: &str) -> String {
        format!("{}/cooldown/{}", self.base_url, familiar)
    }
}

#[async_trait]
impl CooldownStore for HttpStore {
    async fn last_activation(&self, familiar: &str) -> Result<Option<DateTime<Utc>>> {
        let url = self.cooldown_url(familiar);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CooldownError::unreachable(e.to_string()))?
            .error_for_status()
            .map_err(|e| CooldownError::unreachable(e.to_string()))?;

        let status: CooldownStatus = response
            .json()
            .await
            .map_err(|e| CooldownError::unreachable(format!("JSON parse error: {}", e)))?;

        match status.time {
            None => Ok(None),
            Some(raw) => {
                let parsed = DateTime::parse_from_rfc3339(&raw)
                    .map_err(|_| CooldownError::malformed(familiar, raw.clone()))?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
        }
    }

    async fn record_activation(&self, familiar: &str, at: DateTime<Utc>) -> Result<()> {
        let url = self.cooldown_url(familiar);
        let update = CooldownUpdate {
            timestamp: at.to_rfc3339(),
        };

        self.client
            .post(&url)
            .json(&update)
            .send()
            .await
            .map_err(|e| CooldownError::unreachable(e.to_string()))?
            .error_for_status()
            .map_err(|e| CooldownError::unreachable(e.to_string()))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}
