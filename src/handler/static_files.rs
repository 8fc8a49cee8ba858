//! Static file serving module
//!
//! Handles GET and HEAD against the web root: existence and directory
//! checks, MIME detection, and response building.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use super::resolve;
use crate::error::ServeError;
use crate::http::{self, mime};

/// Serve a file for GET
///
/// `/` and the empty path map to `/index.html`. A directory target
/// falls back to its own `index.html` when present.
pub async fn serve_file(
    request_path: &str,
    web_root: &str,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let mut path = normalize_root(request_path).to_string();
    let mut fs_path = resolve::resolve(&path, web_root);

    let mut meta = stat(&fs_path).await?;
    if meta.is_dir() {
        // Directory: try its index.html, otherwise 404
        path = format!("{}/index.html", path.trim_end_matches('/'));
        fs_path = resolve::resolve(&path, web_root);
        meta = stat(&fs_path).await?;
        if meta.is_dir() {
            return Err(ServeError::NotFound);
        }
    }

    let content = match fs::read(&fs_path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ServeError::NotFound),
        Err(e) => return Err(e.into()),
    };

    Ok(http::build_file_response(
        Bytes::from(content),
        mime::content_type(&path),
        false,
    ))
}

/// Serve headers only for HEAD
///
/// Same existence check and header computation as GET, but a directory
/// never falls back to its index file: HEAD on a directory is 404.
pub async fn head_file(
    request_path: &str,
    web_root: &str,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let path = normalize_root(request_path);
    let fs_path = resolve::resolve(path, web_root);

    let meta = stat(&fs_path).await?;
    if meta.is_dir() {
        return Err(ServeError::NotFound);
    }

    Ok(http::build_file_head_response(
        meta.len(),
        mime::content_type(path),
    ))
}

/// Map the root path to the default index document
fn normalize_root(request_path: &str) -> &str {
    if request_path.is_empty() || request_path == "/" {
        "/index.html"
    } else {
        request_path
    }
}

/// Stat a filesystem path, classifying absence as `NotFound`
async fn stat(fs_path: &str) -> Result<std::fs::Metadata, ServeError> {
    match fs::metadata(fs_path).await {
        Ok(m) => Ok(m),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ServeError::NotFound),
        Err(e) => Err(e.into()),
    }
}
