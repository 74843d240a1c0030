//! Request handler module
//!
//! Pipeline dispatch, the site route table, and static asset lookup.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
