// Site state module
// Immutable per-process state, built once at startup and shared by reference

use crate::handler::pages::{self, RouteTable};
use crate::logger::RequestLog;
use crate::render::Renderer;

use super::types::Config;

/// Everything the dispatcher needs to serve a request.
///
/// Constructed once during initialization and never mutated afterwards; the
/// accept loop hands it to every connection behind an `Arc`.
pub struct SiteState {
    pub config: Config,
    pub routes: RouteTable,
    pub renderer: Renderer,
    pub request_log: RequestLog,
}

impl SiteState {
    pub fn new(config: Config, renderer: Renderer, request_log: RequestLog) -> Self {
        Self {
            config,
            routes: pages::site_routes(),
            renderer,
            request_log,
        }
    }
}
