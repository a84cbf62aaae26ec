//! Configuration management for gitcardd.
//!
//! Loads settings from /etc/gitcard/config.toml or uses defaults.

use anyhow::Result;
use gitcard_common::CardOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/gitcard/config.toml";

/// Default config file path for fallback
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/gitcard/config.toml";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address; localhost only, put a proxy in front for public use
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8620".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Account rendered when a request names none
    #[serde(default = "default_user")]
    pub default_user: String,

    /// Bearer token passed through to the API. Empty means unauthenticated;
    /// the GITHUB_TOKEN environment variable takes precedence.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_user() -> String {
    "octocat".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            default_user: default_user(),
            token: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl GithubConfig {
    /// Effective token: environment first, then the config file, else none.
    pub fn effective_token(&self) -> Option<String> {
        resolve_token(std::env::var("GITHUB_TOKEN").ok(), &self.token)
    }
}

/// Token precedence, separated out so it is testable without touching
/// process environment.
fn resolve_token(env_token: Option<String>, config_token: &str) -> Option<String> {
    if let Some(token) = env_token {
        if !token.is_empty() {
            return Some(token);
        }
    }
    if config_token.is_empty() {
        None
    } else {
        Some(config_token.to_string())
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub github: GithubConfig,

    /// Card rendering options
    #[serde(default)]
    pub card: CardOptions,
}

impl Config {
    /// Load config from file, or return defaults
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH)
            .or_else(|_| Self::load_from_path(DEFAULT_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            })
    }

    /// Load config from specific path
    pub fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }

    /// Save default config to path (for init)
    pub fn save_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)?;
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved default config to {}", path);
        Ok(())
    }
}
