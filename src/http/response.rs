//! HTTP response building module
//!
//! Builders for the responses the dispatcher produces, decoupled from
//! specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::mime;
use crate::logger;

/// Build the uniform status+message response
///
/// Body is `"HTTP/1.1 <status> <message>\n\n<message>"` as plain text.
/// Used for every non-200/204 outcome, including the 201 "Created"
/// success case.
pub fn build_status_response(status: u16, message: &str) -> Response<Full<Bytes>> {
    let body = format!("HTTP/1.1 {status} {message}\n\n{message}");
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response carrying file content
///
/// `Content-Length` is always the full byte size of the file;
/// `is_head` empties the body without touching the headers. Text-family
/// types get a `; charset=utf-8` suffix.
pub fn build_file_response(
    data: Bytes,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let content_type = if mime::needs_charset(content_type) {
        format!("{content_type}; charset=utf-8")
    } else {
        content_type.to_string()
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the headers-only 200 response used by HEAD
///
/// Same header computation as `build_file_response`, with the length
/// taken from file metadata instead of an in-memory body.
pub fn build_file_head_response(
    content_length: u64,
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    let content_type = if mime::needs_charset(content_type) {
        format!("{content_type}; charset=utf-8")
    } else {
        content_type.to_string()
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 HTML response for the static home greeting
pub fn build_html_response(content: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the empty 204 No Content response used by DELETE
pub fn build_no_content_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(204, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a JSON response for structured payloads
pub fn build_json_response<T: Serialize>(body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_status_response(500, "Internal Server Error");
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
