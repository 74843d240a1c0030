//! Site route table
//!
//! An ordered, immutable table of exact-path, method-qualified entries built
//! once at startup. Each entry either renders a named template with a fixed
//! context or returns a raw JSON payload.

use hyper::Method;
use serde_json::{json, Value};

/// What a matched route does
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Render a template with a fixed context mapping
    Render { template: &'static str, context: Value },
    /// Return a raw JSON payload, 200
    Direct { payload: Value },
}

/// One registered route: exact path, single method
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub action: PageAction,
}

/// Ordered route table; lookup is first exact (method, path) match.
/// No wildcards, prefixes, or path parameters.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// First entry matching (method, path) exactly, if any.
    /// HEAD requests match GET entries; the body is elided downstream.
    pub fn find(&self, method: &Method, path: &str) -> Option<&PageAction> {
        let lookup = if *method == Method::HEAD {
            &Method::GET
        } else {
            method
        };
        self.entries
            .iter()
            .find(|e| e.method == *lookup && e.path == path)
            .map(|e| &e.action)
    }

    /// Template names referenced by `Render` entries, for startup checks
    pub fn templates(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter_map(|e| match &e.action {
            PageAction::Render { template, .. } => Some(*template),
            PageAction::Direct { .. } => None,
        })
    }
}

/// The site's fixed routes
pub fn site_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry {
            method: Method::GET,
            path: "/",
            action: PageAction::Render {
                template: "home",
                context: json!({"pageTitle": "Home Page", "name": "Catseye"}),
            },
        },
        RouteEntry {
            method: Method::GET,
            path: "/about",
            action: PageAction::Render {
                template: "about",
                context: json!({"pageTitle": "About Page"}),
            },
        },
        RouteEntry {
            method: Method::GET,
            path: "/projects",
            action: PageAction::Render {
                template: "projects",
                context: json!({"pageTitle": "Projects Page"}),
            },
        },
        RouteEntry {
            method: Method::GET,
            path: "/bad",
            action: PageAction::Direct {
                payload: json!({"errorMessage": "Unable to process the request!"}),
            },
        },
    ])
}
