//! Nexus Service
//!
//! HTTP service holding the authoritative cooldown map and the
//! ability-cast endpoints. The router is exposed here so integration
//! tests can drive a real listener.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod models;
pub mod state;

pub use state::AppState;

/// Build the Nexus router over shared state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Cooldown store
        .route(
            "/cooldown/{familiar}",
            get(handlers::get_cooldown).post(handlers::set_cooldown),
        )
        // Ability casts
        .route("/abilities", get(handlers::list_abilities))
        .route("/abilities/{name}", post(handlers::cast_ability))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
