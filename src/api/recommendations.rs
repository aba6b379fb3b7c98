//! Recommendation routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use validator::Validate;

use super::error::ApiResult;
use crate::AppState;
use crate::library::Recommendation;

/// Accepted as a JSON body (POST) or as query parameters (GET).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecommendationRequest {
    /// Genre or artist name, e.g. `pop`, `sad`, `Artist A`.
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub limit: Option<usize>,
}

pub fn build_router() -> Router<AppState> {
    Router::new().route("/", get(recommend_query).post(recommend_body))
}

fn recommend(state: &AppState, req: &RecommendationRequest) -> ApiResult<Json<Recommendation>> {
    req.validate()?;

    let rec = state.library.recommend(req.category.as_deref(), req.limit);
    tracing::debug!(
        name: "recommendation.served",
        category = %rec.category,
        count = rec.count,
        "Recommendations served"
    );
    Ok(Json(rec))
}

/// POST /recommendations
async fn recommend_body(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> ApiResult<Json<Recommendation>> {
    recommend(&state, &req)
}

/// GET /recommendations?category=..&limit=..
async fn recommend_query(
    State(state): State<AppState>,
    Query(req): Query<RecommendationRequest>,
) -> ApiResult<Json<Recommendation>> {
    recommend(&state, &req)
}
