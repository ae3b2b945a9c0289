//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, file routing
//! and response assembly.

use crate::config::{AppState, PathFilter, RouterConfig};
use crate::http::{self, response::build_500_response};
use crate::logger::{self, AccessLogEntry};
use crate::router::Route;
use crate::runtime::{ContentExecutor, Context, Output};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut entry =
        AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path.clone());
    entry.http_version = http_version(req.version()).to_string();
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = match method {
        Method::GET | Method::HEAD => {
            let is_head = method == Method::HEAD;
            match route_blocking(&state, path).await {
                Some(output) => {
                    entry.executed.clone_from(&output.executed);
                    http::build_output_response(output, &state.config.http, is_head)
                }
                None => build_500_response(),
            }
        }
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run the synchronous router off the async workers
async fn route_blocking(state: &Arc<AppState>, path: String) -> Option<Output> {
    let state = Arc::clone(state);
    let task =
        tokio::task::spawn_blocking(move || resolve(&state.config.router, &state.filter, &path));
    match task.await {
        Ok(output) => Some(output),
        Err(e) => {
            logger::log_error(&format!("Routing task failed: {e}"));
            None
        }
    }
}

/// Route one logical path against the configured controller root
///
/// Rejected or missing paths are rerouted to `fallback_path` (with status 404)
/// when one is configured; otherwise the router's not-found signal applies.
pub fn resolve(router: &RouterConfig, filter: &PathFilter, url_path: &str) -> Output {
    let executor = ContentExecutor;
    let mut ctx = Context::new(&executor);
    let rejects = |path: &str| filter.rejects(path);
    let mut fell_back = false;
    let mut on_fallback = || fell_back = true;

    let mut route = configured(Route::new(url_path), router).filter(&rejects);
    if router.fallback_path.is_some() {
        route = route.fallback(&mut on_fallback);
    }
    let routed = route.dispatch(&mut ctx);

    if routed && ctx.output().executed.is_empty() {
        // Controller found but could not be executed
        ctx.output_mut().status = 500;
    }

    if fell_back {
        if let Some(fallback_path) = router.fallback_path.as_deref() {
            ctx.output_mut().status = 404;
            configured(Route::new(fallback_path), router).dispatch(&mut ctx);
        }
    }

    ctx.into_output()
}

/// Apply root, extension and view suffix from config
fn configured<'a>(route: Route<'a>, router: &'a RouterConfig) -> Route<'a> {
    let route = route
        .controller_root(&router.controller_root)
        .extension(&router.extension);
    match router.view_suffix.as_deref() {
        Some(suffix) => route.view_suffix(suffix),
        None => route,
    }
}

fn http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, name: &str, content: &str) {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn router_config(root: &Path) -> RouterConfig {
        RouterConfig {
            controller_root: root.to_str().unwrap().to_string(),
            extension: ".html".to_string(),
            view_suffix: Some(".view".to_string()),
            ..RouterConfig::default()
        }
    }

    #[test]
    fn test_resolve_controller_and_view() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "blog/index.html", "<main>");
        write(dir.path(), "blog/index.view.html", "</main>");
        let cfg = router_config(dir.path());

        let output = resolve(&cfg, &cfg.path_filter(), "/blog/");
        assert_eq!(output.status, 200);
        assert_eq!(output.body, b"<main></main>");
        assert_eq!(output.content_type, Some("text/html; charset=utf-8"));
        assert_eq!(output.executed.len(), 2);
    }

    #[test]
    fn test_resolve_missing_without_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = router_config(dir.path());
        let output = resolve(&cfg, &cfg.path_filter(), "/missing");
        assert_eq!(output.status, 404);
        assert!(output.body.is_empty());
    }

    #[test]
    fn test_resolve_missing_with_fallback_page() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "404.html", "not here");
        let mut cfg = router_config(dir.path());
        cfg.fallback_path = Some("/404".to_string());

        let output = resolve(&cfg, &cfg.path_filter(), "/missing");
        assert_eq!(output.status, 404);
        assert_eq!(output.body, b"not here");
    }

    #[test]
    fn test_resolve_fallback_page_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = router_config(dir.path());
        cfg.fallback_path = Some("/404".to_string());

        let output = resolve(&cfg, &cfg.path_filter(), "/missing");
        assert_eq!(output.status, 404);
        assert!(output.body.is_empty());
    }

    #[test]
    fn test_resolve_denied_prefix_never_served() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_layout.html", "secret");
        let mut cfg = router_config(dir.path());
        cfg.deny_prefixes = vec!["/_".to_string()];

        let output = resolve(&cfg, &cfg.path_filter(), "/_layout");
        assert_eq!(output.status, 404);
        assert!(output.executed.is_empty());
    }

    #[test]
    fn test_resolve_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "public/page.html", "page");
        let mut cfg = router_config(dir.path());
        cfg.controller_root = dir.path().join("public").to_str().unwrap().to_string();
        write(dir.path(), "secret.html", "secret");

        let output = resolve(&cfg, &cfg.path_filter(), "/../secret");
        assert_eq!(output.status, 404);
        assert!(output.body.is_empty());
    }

    #[test]
    fn test_resolve_unreadable_controller() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the controller file should be
        fs::create_dir_all(dir.path().join("odd.html")).unwrap();
        let cfg = router_config(dir.path());

        let output = resolve(&cfg, &cfg.path_filter(), "/odd");
        assert_eq!(output.status, 500);
    }

    #[test]
    fn test_http_version() {
        assert_eq!(http_version(Version::HTTP_11), "1.1");
        assert_eq!(http_version(Version::HTTP_10), "1.0");
        assert_eq!(http_version(Version::HTTP_2), "2");
    }
}
