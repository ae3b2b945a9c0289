//! Request handler module
//!
//! Bridges hyper requests to the file router: method validation, routing on
//! the blocking pool, fallback rerouting and access logging.

pub mod dispatch;

// Re-export main entry point
pub use dispatch::{handle_request, resolve};
