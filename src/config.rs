//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, config file, `PLAYLIST_`
//! environment variables, CLI flags (and the env vars clap binds to them).

use std::path::Path;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// File picked up from the working directory when no `--config` is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Origins the frontend dev servers run on.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8000",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:8000",
];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub api: ApiConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ApiConfig {
    #[validate(custom(function = "validate_prefix"))]
    pub prefix: String,
    #[validate(length(min = 1))]
    pub project_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.len() > 1 && prefix.starts_with('/') && !prefix.ends_with('/') {
        Ok(())
    } else {
        Err(ValidationError::new("api_prefix"))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let origins: Vec<String> = DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("api.prefix", "/api/v1")?
            .set_default("api.project_name", "Playlist Generator API")?
            .set_default("cors.origins", origins)?;

        // An explicit file must exist; the cwd fallback is optional.
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path).required(true)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
            None => {}
        }

        // E.g. PLAYLIST_SERVER__PORT=9000, PLAYLIST_CORS__ORIGINS=http://a,http://b
        builder = builder.add_source(
            Environment::with_prefix("PLAYLIST")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.origins")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {e}")))?;
        Ok(cfg)
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
