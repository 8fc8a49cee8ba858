//! Logging utilities
//!
//! Plain stdout/stderr logging for server lifecycle, access lines and
//! errors. Access lines carry a local timestamp.

use crate::config::Config;
use hyper::Method;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let web_root = Path::new(&config.server.web_root);
    let web_root_abs = web_root
        .canonicalize()
        .map_or_else(|_| web_root.display().to_string(), |p| p.display().to_string());

    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Web root: {web_root_abs}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, path: &str) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{now}] {method} {path}");
}

pub fn log_response(method: &Method, path: &str, status: u16) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{now}] {method} {path} - {status}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
