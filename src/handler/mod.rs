//! Request handling module
//!
//! Dispatch, file serving, mutation and path resolution.

pub mod mutation;
pub mod resolve;
pub mod router;
pub mod static_files;

pub use router::{dispatch, handle_request};
