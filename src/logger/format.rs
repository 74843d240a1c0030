//! Request log line format
//!
//! One line per request: `<ISO-8601 timestamp>: <METHOD> <PATH>`.

use chrono::{DateTime, SecondsFormat, Utc};

/// A single request log record, stamped at arrival
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    pub time: DateTime<Utc>,
    pub method: String,
    pub path: String,
}

impl RequestLogEntry {
    /// Create an entry timestamped with the current time
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            time: Utc::now(),
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    /// Render the fixed log line, e.g.
    /// `2026-08-06T12:00:00.000Z: GET /about`
    pub fn format(&self) -> String {
        format!(
            "{}: {} {}",
            self.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.method,
            self.path
        )
    }
}
