//! Request-path to filesystem-path resolution
//!
//! Deliberately lexical: no canonicalization, no symlink chasing.
//! Mutation callers must reject traversal attempts with
//! [`has_traversal`] before resolving.

/// Join a request path under the web root
///
/// Strips a single leading `/` and concatenates with a `/` separator.
pub fn resolve(request_path: &str, web_root: &str) -> String {
    let relative = request_path.strip_prefix('/').unwrap_or(request_path);
    format!("{web_root}/{relative}")
}

/// Detect a path traversal attempt
///
/// This is a raw substring check for `..`, matching the documented
/// policy of the wire protocol. It also rejects legitimate names that
/// happen to contain two consecutive dots; tests pin that behavior
/// down as a known-weak boundary.
pub fn has_traversal(request_path: &str) -> bool {
    request_path.contains("..")
}
