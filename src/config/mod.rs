// Configuration module entry point
// Loads layered configuration and derives the router's path filter

mod filter;
mod state;
mod types;

use std::net::SocketAddr;

pub use filter::PathFilter;
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, RouterConfig, ServerConfig};

/// Prefix for environment overrides, e.g. `FILE_ROUTER_ROUTER__CONTROLLER_ROOT`
const ENV_PREFIX: &str = "FILE_ROUTER";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("router.deny_prefixes")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.read_timeout", 30)?
            .set_default("http.default_content_type", "text/html; charset=utf-8")?
            .set_default("http.server_name", "file_router")?
            .set_default("router.controller_root", crate::router::DEFAULT_CONTROLLER_ROOT)?
            .set_default("router.extension", crate::router::DEFAULT_EXTENSION)?
            .set_default("router.deny_traversal", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
