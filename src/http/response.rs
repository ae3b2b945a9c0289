//! HTTP response building module
//!
//! Turns a routed `Output` into a hyper response, plus the few fixed
//! responses the host answers without routing.

use crate::config::HttpConfig;
use crate::runtime::Output;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const NOT_FOUND_BODY: &str = "404 Not Found";

/// Build the response for a routed request
///
/// A 404 with nothing written gets a plain-text body, the router's
/// not-found signal carries no message of its own.
pub fn build_output_response(
    output: Output,
    http: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let (content_type, body) = if output.status == 404 && output.body.is_empty() {
        ("text/plain", Bytes::from(NOT_FOUND_BODY))
    } else {
        (
            output
                .content_type
                .unwrap_or(http.default_content_type.as_str()),
            Bytes::from(output.body),
        )
    };
    let content_length = body.len();
    let body = if is_head { Bytes::new() } else { body };

    Response::builder()
        .status(output.status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Server", http.server_name.as_str())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&output.status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 response when routing itself could not run
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn http_config() -> HttpConfig {
        HttpConfig {
            default_content_type: "text/html; charset=utf-8".to_string(),
            server_name: "file_router".to_string(),
        }
    }

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_output_response() {
        let mut output = Output::new();
        output.content_type = Some("application/json");
        output.write_str("{}");

        let resp = build_output_response(output, &http_config(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["content-length"], "2");
        assert_eq!(resp.headers()["server"], "file_router");
        assert_eq!(body_of(resp).await, "{}");
    }

    #[tokio::test]
    async fn test_default_content_type() {
        let mut output = Output::new();
        output.write_str("hi");
        let resp = build_output_response(output, &http_config(), false);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_empty_not_found() {
        let mut output = Output::new();
        output.status = 404;
        let resp = build_output_response(output, &http_config(), false);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(body_of(resp).await, NOT_FOUND_BODY);
    }

    #[tokio::test]
    async fn test_not_found_page_kept() {
        let mut output = Output::new();
        output.status = 404;
        output.write_str("<h1>gone</h1>");
        let resp = build_output_response(output, &http_config(), false);
        assert_eq!(resp.status(), 404);
        assert_eq!(body_of(resp).await, "<h1>gone</h1>");
    }

    #[tokio::test]
    async fn test_head_has_length_but_no_body() {
        let mut output = Output::new();
        output.write_str("hello");
        let resp = build_output_response(output, &http_config(), true);
        assert_eq!(resp.headers()["content-length"], "5");
        assert!(body_of(resp).await.is_empty());
    }

    #[test]
    fn test_fixed_responses() {
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_options_response().status(), 204);
        assert_eq!(build_500_response().status(), 500);
    }
}
