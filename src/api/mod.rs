//! JSON REST API.
//!
//! Mounted under the configured prefix (`/api/v1` by default):
//!
//! - `/playlists`: playlist CRUD
//! - `/categories`: genre and artist groupings
//! - `/recommendations`: suggestions for a category

pub mod categories;
pub mod error;
pub mod playlists;
pub mod recommendations;

use axum::{Json, Router, extract::State};
use serde_json::{Value, json};

use crate::AppState;

pub use error::{ApiError, ApiResult};

/// Version reported by the welcome endpoint.
pub const API_VERSION: &str = "1.0.0";

/// Routes relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/playlists", playlists::build_router())
        .nest("/categories", categories::build_router())
        .nest("/recommendations", recommendations::build_router())
}

/// GET {prefix} - API landing document.
pub async fn welcome(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", state.config.api.project_name),
        "version": API_VERSION,
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
