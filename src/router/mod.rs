//! File-based routing module
//!
//! Maps a logical URL path onto a controller file under a root directory:
//! - Trailing `/` resolves to the directory's `index` file
//! - An optional filter rejects paths before the filesystem is touched
//! - An optional view file runs after the controller
//! - A fallback (or a not-found signal) handles rejections and misses

mod path;
mod route;

pub use path::{normalize_path, primary_path, view_path, INDEX_SEGMENT};
pub use route::{route, Route, Runtime, DEFAULT_CONTROLLER_ROOT, DEFAULT_EXTENSION};
