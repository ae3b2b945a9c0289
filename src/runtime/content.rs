//! Content executor module
//!
//! "Executes" a file by emitting its bytes, which turns controller and view
//! files into plain templates. Used by the HTTP host.

use super::{ExecuteError, Executor, Output};
use crate::http::mime;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentExecutor;

impl Executor for ContentExecutor {
    fn execute(&self, path: &str, output: &mut Output) -> Result<(), ExecuteError> {
        let content = fs::read(path).map_err(|source| ExecuteError::Io {
            path: path.to_string(),
            source,
        })?;

        // The controller decides the content type, views only append
        if output.content_type.is_none() {
            let extension = Path::new(path).extension().and_then(|e| e.to_str());
            output.content_type = Some(mime::get_content_type(extension));
        }
        output.write(&content);
        Ok(())
    }
}
