//! Logger module
//!
//! Two concerns live here:
//! - the per-request log: a fixed-format line appended to a file by an async
//!   drain task (`RequestLog`), never blocking the response
//! - console diagnostics for server lifecycle and recoverable errors

mod format;
mod writer;

pub use format::RequestLogEntry;
pub use writer::RequestLog;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server is up on http://{addr}");
    println!("Request log: {}", config.logging.request_log_file);
    println!("Static assets: {}/", config.site.public_root);
    println!("Templates: {}/", config.site.views_dir);
    if config.site.maintenance {
        println!("Maintenance mode is ON: all requests get the maintenance page");
    }
    println!("======================================");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
