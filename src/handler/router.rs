//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: counts the request,
//! evaluates static routes, switches on method, and converts every
//! classified failure into a uniform response. No request is ever
//! dropped without a response.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

use super::{mutation, static_files};
use crate::config::AppState;
use crate::error::ServeError;
use crate::http;
use crate::logger;

/// Payload for the stats endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsPayload {
    uptime_seconds: String,
    total_requests: u64,
}

/// Main entry point for HTTP request handling
///
/// Collects the request body, then hands off to [`dispatch`]. The
/// `Infallible` error type is the contract with `service_fn`: a
/// response always comes back.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if state.config.logging.access_log {
        logger::log_request(&method, &path);
    }

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            // Body read failures still count the request and still
            // produce exactly one response.
            state.record_request();
            logger::log_error(&format!("Failed to read request body: {e}"));
            let response = ServeError::Internal(e.to_string()).into_response();
            log_outcome(&state, &method, &path, &response);
            return Ok(response);
        }
    };

    let response = dispatch(&state, &method, &path, &body).await;
    log_outcome(&state, &method, &path, &response);
    Ok(response)
}

/// Route one request to a handler and absorb its failure
///
/// Increments the request counter exactly once, before any routing
/// decision, so error responses count too.
pub async fn dispatch(
    state: &AppState,
    method: &Method,
    path: &str,
    body: &Bytes,
) -> Response<Full<Bytes>> {
    state.record_request();

    // Static routes win over filesystem dispatch
    if let Some(response) = match_static_route(state, method, path) {
        return response;
    }

    let web_root = &state.config.server.web_root;
    let result = match *method {
        Method::GET => static_files::serve_file(path, web_root).await,
        Method::HEAD => static_files::head_file(path, web_root).await,
        Method::POST | Method::PUT => mutation::save_file(path, web_root, body).await,
        Method::DELETE => mutation::delete_file(path, web_root).await,
        _ => Err(ServeError::MethodNotAllowed),
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            if matches!(e, ServeError::Internal(_) | ServeError::MethodNotAllowed) {
                logger::log_warning(&format!("{method} {path}: {e}"));
            }
            e.into_response()
        }
    }
}

/// Evaluate the fixed routes (home greeting, stats) before any
/// filesystem resolution
fn match_static_route(
    state: &AppState,
    method: &Method,
    path: &str,
) -> Option<Response<Full<Bytes>>> {
    if *method != Method::GET && *method != Method::HEAD {
        return None;
    }
    let is_head = *method == Method::HEAD;

    if path == state.config.routes.stats_path {
        let payload = StatsPayload {
            uptime_seconds: format!("{:.2}", state.uptime_seconds()),
            total_requests: state.request_count(),
        };
        return Some(http::build_json_response(&payload));
    }

    if path == "/" || path.is_empty() {
        if let Some(greeting) = &state.config.routes.home_greeting {
            return Some(http::build_html_response(greeting, is_head));
        }
    }

    None
}

/// Access-log the final status for a request
fn log_outcome(state: &AppState, method: &Method, path: &str, response: &Response<Full<Bytes>>) {
    if state.config.logging.access_log {
        logger::log_response(method, path, response.status().as_u16());
    }
}
