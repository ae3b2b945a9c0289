//! Route resolution module
//!
//! Implements the filter -> controller -> view decision sequence.

use super::path::{normalize_path, primary_path, view_path};
use crate::logger;
use crate::runtime::ExecuteError;

/// Root used when the caller does not name one
pub const DEFAULT_CONTROLLER_ROOT: &str = "/var/www/html";

/// Extension appended to every resolved path by default
pub const DEFAULT_EXTENSION: &str = ".php";

/// Capabilities the router delegates to
///
/// The router never reads files or writes output itself: it asks the runtime
/// whether a path exists, asks it to execute resolved paths, and asks it to
/// record a not-found status when no fallback was supplied.
pub trait Runtime {
    /// Check whether something exists at `path`
    fn file_exists(&self, path: &str) -> bool;

    /// Run the controller or view at `path`
    fn execute(&mut self, path: &str) -> Result<(), ExecuteError>;

    /// Record a "resource not found" status for the current response
    fn not_found(&mut self);
}

/// A single routing call
///
/// ```
/// use file_router::router::Route;
/// use file_router::runtime::{Context, HandlerRegistry};
///
/// let registry = HandlerRegistry::new();
/// let mut ctx = Context::new(&registry);
/// let routed = Route::new("/missing").controller_root("/nonexistent").dispatch(&mut ctx);
/// assert!(!routed);
/// assert_eq!(ctx.output().status, 404);
/// ```
pub struct Route<'a> {
    url_path: &'a str,
    controller_root: &'a str,
    filter: Option<&'a dyn Fn(&str) -> bool>,
    fallback: Option<&'a mut dyn FnMut()>,
    view_suffix: Option<&'a str>,
    extension: &'a str,
}

impl<'a> Route<'a> {
    pub fn new(url_path: &'a str) -> Self {
        Self {
            url_path,
            controller_root: DEFAULT_CONTROLLER_ROOT,
            filter: None,
            fallback: None,
            view_suffix: None,
            extension: DEFAULT_EXTENSION,
        }
    }

    #[must_use]
    pub fn controller_root(mut self, controller_root: &'a str) -> Self {
        self.controller_root = controller_root;
        self
    }

    /// Reject the request when `filter(normalized_path)` returns true
    #[must_use]
    pub fn filter(mut self, filter: &'a dyn Fn(&str) -> bool) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Called instead of the not-found signal
    #[must_use]
    pub fn fallback(mut self, fallback: &'a mut dyn FnMut()) -> Self {
        self.fallback = Some(fallback);
        self
    }

    #[must_use]
    pub fn view_suffix(mut self, view_suffix: &'a str) -> Self {
        self.view_suffix = Some(view_suffix);
        self
    }

    #[must_use]
    pub fn extension(mut self, extension: &'a str) -> Self {
        self.extension = extension;
        self
    }

    /// Resolve and execute
    ///
    /// Returns true when the controller file was found and executed. On false,
    /// exactly one of fallback / `Runtime::not_found` has run.
    pub fn dispatch<R: Runtime + ?Sized>(self, runtime: &mut R) -> bool {
        let path = normalize_path(self.url_path);

        if let Some(filter) = self.filter {
            if filter(&path) {
                logger::log_debug(&format!("[Route] {path} rejected by filter"));
                reject(runtime, self.fallback);
                return false;
            }
        }

        let primary = primary_path(self.controller_root, &path, self.extension);
        if !runtime.file_exists(&primary) {
            logger::log_debug(&format!("[Route] {path} -> {primary} not found"));
            reject(runtime, self.fallback);
            return false;
        }

        logger::log_debug(&format!("[Route] {path} -> {primary}"));
        if let Err(e) = runtime.execute(&primary) {
            // Resolution succeeded, the executor owns the failure response
            logger::log_error(&format!("[Route] Controller failed: {e}"));
            return true;
        }

        if let Some(suffix) = self.view_suffix {
            let view = view_path(self.controller_root, &path, suffix, self.extension);
            if runtime.file_exists(&view) {
                logger::log_debug(&format!("[Route] {path} view -> {view}"));
                if let Err(e) = runtime.execute(&view) {
                    logger::log_error(&format!("[Route] View failed: {e}"));
                }
            }
        }

        true
    }
}

/// Fallback if supplied, not-found otherwise
fn reject<R: Runtime + ?Sized>(runtime: &mut R, fallback: Option<&mut dyn FnMut()>) {
    match fallback {
        Some(fallback) => fallback(),
        None => runtime.not_found(),
    }
}

/// Route `url_path` with every option spelled out
///
/// Equivalent to building a [`Route`] and calling [`Route::dispatch`].
pub fn route<'a, R: Runtime + ?Sized>(
    runtime: &mut R,
    url_path: &'a str,
    controller_root: &'a str,
    filter: Option<&'a dyn Fn(&str) -> bool>,
    fallback: Option<&'a mut dyn FnMut()>,
    view_suffix: Option<&'a str>,
    extension: &'a str,
) -> bool {
    Route {
        url_path,
        controller_root,
        filter,
        fallback,
        view_suffix,
        extension,
    }
    .dispatch(runtime)
}
