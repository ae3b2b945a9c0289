//! HTTP protocol layer module
//!
//! Content types and response builders for the host, kept apart from the router.

pub mod mime;
pub mod response;

pub use response::{build_405_response, build_options_response, build_output_response};
