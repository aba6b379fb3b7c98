//! Playlist CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use super::error::{ApiError, ApiResult};
use crate::AppState;
use crate::library::{NewPlaylist, Playlist, PlaylistChanges};

pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_playlists).post(create_playlist))
        .route(
            "/{id}",
            get(get_playlist)
                .put(update_playlist)
                .delete(delete_playlist),
        )
}

/// GET /playlists - List all playlists.
async fn list_playlists(State(state): State<AppState>) -> Json<Vec<Playlist>> {
    Json(state.library.list_playlists())
}

/// GET /playlists/{id}
async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Playlist>> {
    state
        .library
        .get_playlist(id)
        .map(Json)
        .ok_or_else(|| ApiError::playlist_not_found(id))
}

/// POST /playlists - Create a playlist.
async fn create_playlist(
    State(state): State<AppState>,
    Json(req): Json<NewPlaylist>,
) -> ApiResult<(StatusCode, Json<Playlist>)> {
    req.validate()?;

    let playlist = state.library.create_playlist(req);
    tracing::info!(
        name: "playlist.created",
        playlist_id = playlist.id,
        song_count = playlist.songs.len(),
        "Playlist created"
    );
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PUT /playlists/{id} - Update a playlist.
async fn update_playlist(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<PlaylistChanges>,
) -> ApiResult<Json<Playlist>> {
    req.validate()?;

    let playlist = state
        .library
        .update_playlist(id, req)
        .ok_or_else(|| ApiError::playlist_not_found(id))?;
    tracing::info!(name: "playlist.updated", playlist_id = id, "Playlist updated");
    Ok(Json(playlist))
}

/// DELETE /playlists/{id}
async fn delete_playlist(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    if state.library.delete_playlist(id) {
        tracing::info!(name: "playlist.deleted", playlist_id = id, "Playlist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::playlist_not_found(id))
    }
}
