//! Static asset serving
//!
//! Maps URL paths under the public root to file contents, with traversal
//! containment, index-file fallback for directories, inferred Content-Type,
//! and `ETag` conditional handling. Misses fall through to the route table.

use crate::http::{self, cache, mime};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Look up a static asset for `path` under `public_root`.
///
/// Returns the file bytes and inferred Content-Type, or `None` when no file
/// matches (the common miss is silent; only traversal attempts and read
/// failures on existing files are reported).
pub async fn lookup(
    public_root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Strip the leading slash and drop any parent-directory components
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(public_root).join(&clean_path);

    let Ok(root_canonical) = Path::new(public_root).canonicalize() else {
        // Public root missing entirely; nothing static to serve
        return None;
    };

    // Directory requests fall back to index files
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in index_files {
            let candidate = file_path.join(index_file);
            if candidate.is_file() {
                file_path = candidate;
                break;
            }
        }
    }

    if !file_path.is_file() {
        return None;
    }

    // Containment check: the resolved file must stay under the public root
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        crate::logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            crate::logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(&file_path);
    Some((content, content_type))
}

/// Build the asset response, answering a matching `If-None-Match` with 304
pub fn build_asset_response(
    content: Vec<u8>,
    content_type: &'static str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&content);
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }
    http::build_cached_response(content, content_type, &etag, is_head)
}
