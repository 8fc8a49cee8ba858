//! Request failure classification
//!
//! Every handler returns `Result<Response, ServeError>`; the dispatcher
//! converts the error side into a uniform status response, so no raw
//! fault ever escapes past it.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt;

use crate::http::response;

/// Classified request failure
#[derive(Debug)]
pub enum ServeError {
    /// Target file or directory absent
    NotFound,
    /// Path traversal attempt rejected
    Forbidden,
    /// Unsupported HTTP verb for the route
    MethodNotAllowed,
    /// Any unexpected I/O or runtime failure
    Internal(String),
}

impl ServeError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::MethodNotAllowed => 405,
            Self::Internal(_) => 500,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::Forbidden => "Forbidden",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Internal(_) => "Internal Server Error",
        }
    }

    /// Convert into the uniform status+message response
    pub fn into_response(self) -> Response<Full<Bytes>> {
        response::build_status_response(self.status(), self.message())
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(detail) => write!(f, "{} ({detail})", self.message()),
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ServeError {}

impl From<std::io::Error> for ServeError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
