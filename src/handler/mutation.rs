//! File mutation module
//!
//! Handles POST/PUT writes and DELETE against the web root. Both
//! reject raw request paths containing `..` before resolution.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use super::resolve;
use crate::error::ServeError;
use crate::http;
use crate::logger;

/// Write the request body as the target file's new content
///
/// POST and PUT behave identically: overwrite semantics, parent
/// directories created as needed. A failed directory creation is
/// tolerated and the write is still attempted.
pub async fn save_file(
    request_path: &str,
    web_root: &str,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, ServeError> {
    if resolve::has_traversal(request_path) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Err(ServeError::Forbidden);
    }

    let fs_path = resolve::resolve(request_path, web_root);

    if let Some(parent) = Path::new(&fs_path).parent() {
        if let Err(e) = fs::create_dir_all(parent).await {
            logger::log_warning(&format!(
                "Failed to create directory '{}': {e}",
                parent.display()
            ));
        }
    }

    fs::write(&fs_path, body).await?;

    Ok(http::build_status_response(201, "Created"))
}

/// Remove the target file
///
/// A plain unlink is tried first; if the filesystem refuses, the file
/// is truncated and the unlink retried before giving up.
pub async fn delete_file(
    request_path: &str,
    web_root: &str,
) -> Result<Response<Full<Bytes>>, ServeError> {
    if resolve::has_traversal(request_path) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Err(ServeError::Forbidden);
    }

    let fs_path = resolve::resolve(request_path, web_root);

    if let Err(e) = fs::metadata(&fs_path).await {
        return match e.kind() {
            std::io::ErrorKind::NotFound => Err(ServeError::NotFound),
            _ => Err(e.into()),
        };
    }

    if let Err(primary) = fs::remove_file(&fs_path).await {
        logger::log_warning(&format!(
            "Unlink failed for '{fs_path}': {primary}, retrying via truncate"
        ));
        truncate_then_unlink(&fs_path).await?;
    }

    Ok(http::build_no_content_response())
}

/// Fallback deletion strategy for filesystems where the first unlink
/// fails: truncate the file to zero length, then unlink again.
async fn truncate_then_unlink(fs_path: &str) -> Result<(), ServeError> {
    fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(fs_path)
        .await?;
    fs::remove_file(fs_path).await?;
    Ok(())
}
