//! Handler registry module
//!
//! Maps resolved file paths to controller functions registered at startup.
//! A path is only routable when it exists on disk *and* has a handler here.

use super::{ExecuteError, Executor, Output};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A controller or view bound to a resolved path
pub trait Handler: Send + Sync {
    fn call(&self, output: &mut Output) -> Result<(), ExecuteError>;
}

impl<F> Handler for F
where
    F: Fn(&mut Output) -> Result<(), ExecuteError> + Send + Sync,
{
    fn call(&self, output: &mut Output) -> Result<(), ExecuteError> {
        self(output)
    }
}

/// Lookup table from resolved path to handler
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure for `path`, returning the handler it replaced
    pub fn register<F>(&mut self, path: impl Into<String>, handler: F) -> Option<Arc<dyn Handler>>
    where
        F: Fn(&mut Output) -> Result<(), ExecuteError> + Send + Sync + 'static,
    {
        self.register_handler(path, Arc::new(handler))
    }

    pub fn register_handler(
        &mut self,
        path: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> Option<Arc<dyn Handler>> {
        self.handlers.insert(path.into(), handler)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.handlers.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered paths in sorted order
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl Executor for HandlerRegistry {
    fn execute(&self, path: &str, output: &mut Output) -> Result<(), ExecuteError> {
        let handler = self
            .handlers
            .get(path)
            .ok_or_else(|| ExecuteError::Unregistered(path.to_string()))?;
        handler.call(output)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("paths", &self.paths())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello(out: &mut Output) -> Result<(), ExecuteError> {
        out.write_str("hello");
        Ok(())
    }

    #[test]
    fn test_register_and_execute() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("/www/home.php", hello).is_none());
        assert!(registry.contains("/www/home.php"));
        assert_eq!(registry.len(), 1);

        let mut out = Output::new();
        registry.execute("/www/home.php", &mut out).unwrap();
        assert_eq!(out.body, b"hello");
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = HandlerRegistry::new();
        registry.register("/www/home.php", hello);
        let previous = registry.register("/www/home.php", |out: &mut Output| {
            out.write_str("bye");
            Ok(())
        });
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);

        let mut out = Output::new();
        registry.execute("/www/home.php", &mut out).unwrap();
        assert_eq!(out.body, b"bye");
    }

    #[test]
    fn test_unregistered_path() {
        let registry = HandlerRegistry::new();
        let mut out = Output::new();
        let err = registry.execute("/www/none.php", &mut out).unwrap_err();
        assert!(matches!(err, ExecuteError::Unregistered(p) if p == "/www/none.php"));
    }

    #[test]
    fn test_handler_error_propagates() {
        let mut registry = HandlerRegistry::new();
        registry.register("/www/fail.php", |_: &mut Output| {
            Err(ExecuteError::Handler {
                path: "/www/fail.php".to_string(),
                message: "denied".to_string(),
            })
        });
        let mut out = Output::new();
        assert!(registry.execute("/www/fail.php", &mut out).is_err());
    }

    #[test]
    fn test_paths_sorted() {
        let mut registry = HandlerRegistry::new();
        registry.register("/www/b.php", hello);
        registry.register("/www/a.php", hello);
        assert_eq!(registry.paths(), vec!["/www/a.php", "/www/b.php"]);
    }
}
