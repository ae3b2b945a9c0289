// Configuration types module
// Defines all configuration-related data structures

use crate::router::{DEFAULT_CONTROLLER_ROOT, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub router: RouterConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Per-connection timeout in seconds
    pub read_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub default_content_type: String,
    pub server_name: String,
}

/// File router configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Directory prefix prepended to every logical path
    #[serde(default = "default_controller_root")]
    pub controller_root: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Companion file marker, e.g. ".view" pairs `home.php` with `home.view.php`
    #[serde(default)]
    pub view_suffix: Option<String>,
    /// Logical path routed when the requested one is rejected or missing
    #[serde(default)]
    pub fallback_path: Option<String>,
    /// Logical path prefixes that are never routed
    #[serde(default)]
    pub deny_prefixes: Vec<String>,
    /// Reject paths with `..` segments
    #[serde(default = "default_deny_traversal")]
    pub deny_traversal: bool,
}

fn default_controller_root() -> String {
    DEFAULT_CONTROLLER_ROOT.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_deny_traversal() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            controller_root: default_controller_root(),
            extension: default_extension(),
            view_suffix: None,
            fallback_path: None,
            deny_prefixes: Vec::new(),
            deny_traversal: default_deny_traversal(),
        }
    }
}
