//! HTTP request handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use familiar_abilities::{AbilityError, Cast};
use serde_json::{json, Value};

use crate::{
    models::{AbilityList, CooldownStatus, CooldownUpdate},
    state::AppState,
};

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "The Nexus of Whispers is active." }))
}

/// Health check
pub async fn health() -> &'static str {
    "OK"
}

/// Last activation timestamp for a familiar
///
/// Absent records report `{"time": null}`; an unknown familiar is a
/// normal request, never an error.
pub async fn get_cooldown(
    State(state): State<AppState>,
    Path(familiar): Path<String>,
) -> Json<CooldownStatus> {
    let time = state.cooldowns.get(&familiar).map(|entry| entry.value().clone());
    tracing::info!("GET cooldown for '{}'. Found: {:?}", familiar, time);

    Json(CooldownStatus { time })
}

/// Record an activation timestamp for a familiar
///
/// The value is stored exactly as received; validation is the reader's
/// concern.
pub async fn set_cooldown(
    State(state): State<AppState>,
    Path(familiar): Path<String>,
    Json(update): Json<CooldownUpdate>,
) -> StatusCode {
    tracing::info!("POST cooldown for '{}' to {}", familiar, update.timestamp);
    state.cooldowns.insert(familiar, update.timestamp);

    StatusCode::NO_CONTENT
}

/// List castable abilities
pub async fn list_abilities(State(state): State<AppState>) -> Json<AbilityList> {
    let mut abilities = state.abilities.list_abilities();
    abilities.sort();

    Json(AbilityList { abilities })
}

/// Cast an ability by name
///
/// The body is the ability's parameter object; abilities without
/// parameters accept an empty or absent body.
pub async fn cast_ability(
    State(state): State<AppState>,
    Path(name): Path<String>,
    params: Option<Json<Value>>,
) -> Result<Json<Cast>, (StatusCode, String)> {
    let Json(params) = params.unwrap_or_else(|| Json(json!({})));

    match state.abilities.cast(&name, params).await {
        Ok(cast) => Ok(Json(cast)),
        Err(e @ AbilityError::NotFound(_)) => Err((StatusCode::NOT_FOUND, e.to_string())),
        Err(e @ AbilityError::InvalidParameters(_)) => {
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}
