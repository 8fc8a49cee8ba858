//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type for a request path
///
/// Extracts the substring after the last `.`, lower-cases it and looks
/// it up in a fixed table. Paths without a `.` and unknown extensions
/// fall back to `application/octet-stream`.
///
/// # Examples
/// ```
/// use tinyhttpd::http::mime::content_type;
/// assert_eq!(content_type("/index.html"), "text/html");
/// assert_eq!(content_type("/logo.PNG"), "image/png");
/// assert_eq!(content_type("/README"), "application/octet-stream");
/// ```
pub fn content_type(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return "application/octet-stream";
    };

    match ext.to_ascii_lowercase().as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "xml" => "application/xml",

        // Data
        "js" => "application/javascript",
        "json" => "application/json",

        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",

        // Documents
        "pdf" => "application/pdf",

        // Default
        _ => "application/octet-stream",
    }
}

/// Whether a `; charset=utf-8` suffix belongs on this content type
///
/// Applies to the text family plus JavaScript, JSON and XML.
pub fn needs_charset(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || matches!(
            content_type,
            "application/javascript" | "application/json" | "application/xml"
        )
}
