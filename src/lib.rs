//! AI Playlist Generator
//!
//! Serves the playlist generator page and a small JSON API over an in-memory
//! music library.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server with CORS, tracing and timeout middleware
//! - **UI**: Leptos SSR rendering of the generator form
//! - **Library**: in-memory playlists, categories and recommendations
//!
//! # Modules
//!
//! - [`api`]: REST handlers and error mapping
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`library`]: playlist store and derived views
//! - [`server`]: router assembly and startup
//! - [`ui`]: server-rendered pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]

pub mod api;
pub mod config;
pub mod library;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::library::Library;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Playlist store.
    pub library: Library,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(library: Library, config: Arc<AppConfig>) -> Self {
        Self { library, config }
    }
}
