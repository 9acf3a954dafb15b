//! Request/Response models

use serde::{Deserialize, Serialize};

/// Cooldown record as reported by `GET /cooldown/{familiar}`
///
/// `time` is `null` when the familiar has never activated.
#[derive(Debug, Serialize, Deserialize)]
pub struct CooldownStatus {
    pub time: Option<String>,
}

/// Body of `POST /cooldown/{familiar}`
#[derive(Debug, Serialize, Deserialize)]
pub struct CooldownUpdate {
    pub timestamp: String,
}

/// Response of `GET /abilities`
#[derive(Debug, Serialize, Deserialize)]
pub struct AbilityList {
    pub abilities: Vec<String>,
}
