/// Server configuration
use crate::error::{Result, ServerError};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,

    #[serde(default)]
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// Comma-separated allowed origins, or "*" for any
    #[serde(default = "default_origins")]
    pub origins: String,
}

/// Deployment mode; gates only whether internal error detail is echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl CorsSettings {
    /// Allowed origins as individual entries
    pub fn origin_list(&self) -> Vec<&str> {
        self.origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    /// Whether any origin is allowed
    pub fn allow_any(&self) -> bool {
        self.origin_list().iter().any(|origin| *origin == "*")
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.host.parse::<IpAddr>().map_err(|_| {
            ServerError::Config(format!("Invalid listen host: {}", self.server.host))
        })?;

        for origin in self.cors.origin_list() {
            if origin != "*" && HeaderValue::from_str(origin).is_err() {
                return Err(ServerError::Config(format!("Invalid CORS origin: {origin}")));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        origins: default_origins(),
    }
}

fn default_origins() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            cors: default_cors(),
            environment: Environment::default(),
        }
    }
}
