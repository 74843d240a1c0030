//! HTTP protocol layer module
//!
//! Response building, MIME detection, and conditional-request helpers,
//! decoupled from routing and page content.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_500_response, build_cached_response,
    build_html_response, build_json_response,
};
