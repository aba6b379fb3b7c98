use std::sync::Arc;

use axum_test::TestServer;
use playlist_generator::{
    AppState,
    config::{ApiConfig, AppConfig, CorsConfig, ServerConfig},
    library::Library,
    server::build_app,
};

pub const PREFIX: &str = "/api/v1";

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        api: ApiConfig {
            prefix: PREFIX.to_string(),
            project_name: "Playlist Generator API".to_string(),
        },
        cors: CorsConfig {
            origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub fn test_server_with(library: Library) -> TestServer {
    let state = AppState::new(library, Arc::new(test_config()));
    let app = build_app(state).expect("failed to build app");
    TestServer::builder()
        .build(app)
        .expect("failed to create test server")
}

pub fn test_server() -> TestServer {
    test_server_with(Library::with_sample_data())
}

pub fn api(path: &str) -> String {
    format!("{PREFIX}{path}")
}
