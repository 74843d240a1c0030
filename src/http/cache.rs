//! Conditional-request helpers for static assets
//!
//! `ETag` generation plus `If-None-Match` matching, used to answer repeat
//! asset requests with 304.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash-based `ETag` for an asset body, quoted per RFC 9110
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Whether a client `If-None-Match` header matches the computed `ETag`.
/// Accepts comma-separated candidate lists and the `*` wildcard.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
