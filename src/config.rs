//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub graphql: GraphqlConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment mode, controlling asset selection and static serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    Development,
    Production,
}

impl DeployMode {
    /// Parse from an environment value; anything but "production" is
    /// treated as development.
    pub fn from_env_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            DeployMode::Production
        } else {
            DeployMode::Development
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_mode")]
    pub mode: DeployMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_mode() -> DeployMode {
    DeployMode::Development
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: default_mode(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Site metadata rendered into the document template
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub favicon: String,
}

fn default_title() -> String {
    "Vellum".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            favicon: String::new(),
        }
    }
}

/// GraphQL data layer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlConfig {
    #[serde(default = "default_graphql_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_graphql_timeout")]
    pub request_timeout_ms: u64,
}

fn default_graphql_endpoint() -> String {
    "http://localhost:4000/graphql".to_string()
}

fn default_graphql_timeout() -> u64 {
    5000
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_graphql_endpoint(),
            request_timeout_ms: default_graphql_timeout(),
        }
    }
}

/// Asset locations for the two deployment modes
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Bundler output directory, served statically in production
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Asset manifest produced by the bundler (production mode)
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Fixed bundle script reference emitted in development mode
    #[serde(default = "default_dev_bundle")]
    pub dev_bundle: String,
}

fn default_build_dir() -> String {
    "./build".to_string()
}

fn default_manifest_path() -> String {
    "./build/asset-manifest.json".to_string()
}

fn default_dev_bundle() -> String {
    "/static/js/bundle.js".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            manifest_path: default_manifest_path(),
            dev_bundle: default_dev_bundle(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vellum").join("config.toml")),
            Some(PathBuf::from("/etc/vellum/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("VELLUM_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("VELLUM_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(mode) = std::env::var("VELLUM_ENV") {
            self.server.mode = DeployMode::from_env_value(&mode);
        }

        // GraphQL overrides
        if let Ok(endpoint) = std::env::var("VELLUM_GRAPHQL_ENDPOINT") {
            self.graphql.endpoint = endpoint;
        }

        // Asset overrides
        if let Ok(build_dir) = std::env::var("VELLUM_BUILD_DIR") {
            self.assets.build_dir = build_dir;
        }
        if let Ok(manifest) = std::env::var("VELLUM_ASSET_MANIFEST") {
            self.assets.manifest_path = manifest;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("VELLUM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VELLUM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            graphql: GraphqlConfig::default(),
            assets: AssetsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Vellum Configuration
#
# Environment variables override these settings:
# - VELLUM_HOST
# - VELLUM_PORT
# - VELLUM_ENV (development | production)
# - VELLUM_GRAPHQL_ENDPOINT
# - VELLUM_BUILD_DIR
# - VELLUM_ASSET_MANIFEST
# - VELLUM_LOG_LEVEL
# - VELLUM_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 3000

# Deployment mode: development or production
mode = "development"

[site]
# Document title
title = "Vellum"

# Favicon path
favicon = ""

[graphql]
# GraphQL endpoint the data client talks to
endpoint = "http://localhost:4000/graphql"

# Request timeout in milliseconds
request_timeout_ms = 5000

[assets]
# Bundler output directory, served statically in production
build_dir = "./build"

# Asset manifest mapping logical names to hashed filenames
manifest_path = "./build/asset-manifest.json"

# Bundle script emitted in development mode
dev_bundle = "/static/js/bundle.js"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
