//! tinyhttpd — a minimal HTTP server over a filesystem web root
//!
//! GET/HEAD serve files, POST/PUT write them, DELETE removes them; a
//! stats endpoint reports uptime and the running request count.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
