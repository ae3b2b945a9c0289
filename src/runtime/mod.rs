//! Routing runtime module
//!
//! Concrete implementations of the capabilities the router delegates to:
//! - `FileProbe` / `DiskProbe` for existence checks
//! - `Executor` implementations that run a resolved path
//! - `Output`, the per-request status and body accumulator
//! - `Context`, which binds the three into a `router::Runtime`

mod content;
mod probe;
mod registry;

pub use content::ContentExecutor;
pub use probe::{DiskProbe, FileProbe};
pub use registry::{Handler, HandlerRegistry};

use crate::router::Runtime;
use thiserror::Error;

/// Errors raised while executing a resolved path
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No handler is registered for the path
    #[error("no handler registered for '{0}'")]
    Unregistered(String),

    /// A registered handler reported a failure
    #[error("handler for '{path}' failed: {message}")]
    Handler { path: String, message: String },
}

/// Runs whatever lives at a resolved path
pub trait Executor {
    fn execute(&self, path: &str, output: &mut Output) -> Result<(), ExecuteError>;
}

/// Response-side state produced while routing one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    /// Paths executed successfully, in order
    pub executed: Vec<String>,
}

impl Output {
    pub const fn new() -> Self {
        Self {
            status: 200,
            content_type: None,
            body: Vec::new(),
            executed: Vec::new(),
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn write_str(&mut self, text: &str) {
        self.write(text.as_bytes());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds a probe and an executor to one request's output
pub struct Context<'a, E: Executor + ?Sized, P: FileProbe = DiskProbe> {
    probe: P,
    executor: &'a E,
    output: Output,
}

impl<'a, E: Executor + ?Sized> Context<'a, E> {
    /// Context probing the real filesystem
    pub fn new(executor: &'a E) -> Self {
        Self::with_probe(executor, DiskProbe)
    }
}

impl<'a, E: Executor + ?Sized, P: FileProbe> Context<'a, E, P> {
    pub fn with_probe(executor: &'a E, probe: P) -> Self {
        Self {
            probe,
            executor,
            output: Output::new(),
        }
    }

    pub const fn output(&self) -> &Output {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut Output {
        &mut self.output
    }

    pub fn into_output(self) -> Output {
        self.output
    }
}

impl<E: Executor + ?Sized, P: FileProbe> Runtime for Context<'_, E, P> {
    fn file_exists(&self, path: &str) -> bool {
        self.probe.exists(path)
    }

    fn execute(&mut self, path: &str) -> Result<(), ExecuteError> {
        self.executor.execute(path, &mut self.output)?;
        self.output.executed.push(path.to_string());
        Ok(())
    }

    fn not_found(&mut self) {
        self.output.status = 404;
    }
}
