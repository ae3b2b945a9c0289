// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;

use super::filter::PathFilter;
use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Built once from `config.router`
    pub filter: PathFilter,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            filter: config.router.path_filter(),
            active_connections: AtomicUsize::new(0),
        }
    }
}
