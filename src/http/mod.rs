//! HTTP building blocks
//!
//! MIME detection and response construction, shared by all handlers.

pub mod mime;
pub mod response;

pub use response::{
    build_file_head_response, build_file_response, build_html_response, build_json_response,
    build_no_content_response, build_status_response,
};
