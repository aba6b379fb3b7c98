//! Category routes: songs grouped by genre or artist.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use crate::AppState;
use crate::library::{Category, Song};

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
    pub total: usize,
}

pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/{name}", get(get_category))
        .route("/genre/{genre}", get(songs_by_genre))
        .route("/artist/{artist}", get(songs_by_artist))
}

/// GET /categories - All genre and artist categories.
async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state.library.categories();
    Json(CategoryListResponse {
        total: categories.len(),
        categories,
    })
}

/// GET /categories/{name} - A single category, genre or artist.
async fn get_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Category>> {
    state
        .library
        .category(&name)
        .map(Json)
        .ok_or_else(|| ApiError::category_not_found(&name))
}

/// GET /categories/genre/{genre}
async fn songs_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Json<Vec<Song>> {
    Json(state.library.songs_by_genre(&genre))
}

/// GET /categories/artist/{artist}
async fn songs_by_artist(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Json<Vec<Song>> {
    Json(state.library.songs_by_artist(&artist))
}
