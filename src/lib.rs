//! File-based request routing
//!
//! Resolves a logical URL path to a controller file under a root directory,
//! optionally runs a paired view file after it, and hands rejections and
//! misses to a fallback or a not-found signal. `router` holds the algorithm,
//! `runtime` the pluggable capabilities it runs on, and the remaining modules
//! make up the HTTP host shipped as the `file_router` binary.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod router;
pub mod runtime;
pub mod server;

pub use router::{route, Route, Runtime};
