// Configuration types module
// Defines the startup configuration data structures

use serde::Deserialize;

/// Main startup configuration, loaded once from config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// Entry store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Bounded wait for the per-file append lock, in milliseconds
    pub lock_timeout_ms: u64,
}
