// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory all served and mutated paths are resolved under
    pub web_root: String,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

/// Static routes evaluated before filesystem dispatch
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Path answering with uptime and request-count JSON
    pub stats_path: String,
    /// When set, GET / returns this HTML body instead of serving
    /// `web_root/index.html`
    #[serde(default)]
    pub home_greeting: Option<String>,
}
