//! Logger module
//!
//! Plain stdout/stderr logging for the guestbook service: server lifecycle,
//! timestamped access lines, errors and warnings.

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Guestbook service started successfully");
    println!("Listening on: http://{addr}");
    println!("Resource: GET/POST http://{addr}/entries");
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

pub fn log_request(method: &str, path: &str) {
    println!("[{}] {method} {path}", timestamp());
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

/// Request-scoped failures: expected outcomes, logged as warnings.
pub fn log_request_failed(message: &str) {
    eprintln!("[WARN] Request failed: {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
