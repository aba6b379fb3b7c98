use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::api;
use crate::config::{AppConfig, CorsConfig};
use crate::library::Library;
use crate::ui;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Library::with_sample_data(), Arc::clone(&config));
    let app = build_app(state)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        name: "server.started",
        address = %addr,
        api_prefix = %config.api.prefix,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Build the application router: page, health check, API and middleware.
pub fn build_app(state: AppState) -> anyhow::Result<Router> {
    let config = Arc::clone(&state.config);
    let prefix = config.api.prefix.as_str();
    let cors = cors_layer(&config.cors)?;
    let timeout = Duration::from_secs(config.server.request_timeout_secs);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(api::health))
        .route(prefix, get(api::welcome))
        .nest(prefix, api::router())
        .layer(middleware::from_fn_with_state(timeout, timeout_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Trailing slashes are trimmed before routing, so `/api/v1/playlists/`
    // reaches the same handler as `/api/v1/playlists`.
    Ok(Router::new().fallback_service(NormalizePath::trim_trailing_slash(app)))
}

/// Answer 408 when the inner service takes longer than `timeout`.
async fn timeout_middleware(
    State(timeout): State<Duration>,
    req: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(res) => res,
        Err(_elapsed) => {
            tracing::warn!(timeout_secs = timeout.as_secs(), "Request timed out");
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

/// GET / - The playlist generator page.
async fn index_handler() -> Html<String> {
    Html(ui::render_index())
}

fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    // A wildcard cannot be combined with credentials, so echo the origin back.
    let origin = if cors.origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = cors
            .origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(name: "server.shutdown", "Shutdown signal received");
}
