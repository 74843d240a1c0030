//! Request pipeline dispatch
//!
//! Every request runs the same fixed, linear pipeline:
//! log -> maintenance gate -> static assets -> route table -> 404.
//! Logging always happens first; nothing downstream can suppress it.

use crate::config::SiteState;
use crate::handler::pages::PageAction;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, RequestLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<SiteState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    // 1. Log the request. Fire-and-forget; a failed append never blocks us.
    state
        .request_log
        .record(RequestLogEntry::new(method.as_str(), &path));

    // 2. Maintenance gate: when enabled, nothing past this point runs
    if state.config.site.maintenance {
        return Ok(render_page(
            &state,
            "maintenance",
            &json!({"pageTitle": "Maintenance"}),
            is_head,
        ));
    }

    // 3. Static assets under the public root, before any custom route
    if method == Method::GET || is_head {
        if let Some((content, content_type)) = static_files::lookup(
            &state.config.site.public_root,
            &path,
            &state.config.site.index_files,
        )
        .await
        {
            let if_none_match = req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok());
            return Ok(static_files::build_asset_response(
                content,
                content_type,
                if_none_match,
                is_head,
            ));
        }
    }

    // 4. Route table, then the default not-found response
    match state.routes.find(&method, &path) {
        Some(PageAction::Render { template, context }) => {
            Ok(render_page(&state, template, context, is_head))
        }
        Some(PageAction::Direct { payload }) => Ok(http::build_json_response(payload, is_head)),
        None => Ok(http::build_404_response()),
    }
}

/// Render a template into a 200 page; a failed render is logged and answered
/// with a plain 500
fn render_page(
    state: &SiteState,
    template: &str,
    context: &serde_json::Value,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match state.renderer.render(template, context) {
        Ok(html) => http::build_html_response(html, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render template '{template}': {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logger::RequestLog;
    use crate::render::Renderer;
    use http_body_util::BodyExt;

    fn temp_log(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("catseye-web-router-{}-{name}.log", std::process::id()))
            .to_str()
            .unwrap()
            .to_string()
    }

    fn test_state(name: &str, maintenance: bool) -> Arc<SiteState> {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.site.maintenance = maintenance;
        let renderer = Renderer::from_views_dir("views").unwrap();
        let request_log = RequestLog::spawn(temp_log(name));
        Arc::new(SiteState::new(cfg, renderer, request_log))
    }

    fn get(path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_page_renders() {
        let state = test_state("home", false);
        let resp = handle_request(get("/"), state).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body = body_text(resp).await;
        assert!(body.contains("Home Page"));
        assert!(body.contains("Catseye"));
    }

    #[tokio::test]
    async fn about_and_projects_render() {
        let state = test_state("pages", false);

        let resp = handle_request(get("/about"), Arc::clone(&state)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.contains("About Page"));

        let resp = handle_request(get("/projects"), state).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.contains("Projects Page"));
    }

    #[tokio::test]
    async fn bad_route_returns_exact_payload() {
        let state = test_state("bad", false);
        let resp = handle_request(get("/bad"), state).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Type"],
            "application/json; charset=utf-8"
        );
        let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(body, json!({"errorMessage": "Unable to process the request!"}));
    }

    #[tokio::test]
    async fn unmatched_path_is_404_and_still_logged() {
        let log_path = temp_log("notfound");
        let _ = std::fs::remove_file(&log_path);

        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.logging.request_log_file = log_path.clone();
        let state = Arc::new(SiteState::new(
            cfg,
            Renderer::from_views_dir("views").unwrap(),
            RequestLog::spawn(log_path.clone()),
        ));

        let resp = handle_request(get("/nonexistent-path"), state).await.unwrap();
        assert_eq!(resp.status(), 404);

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.trim_end().ends_with(": GET /nonexistent-path"));
        let _ = std::fs::remove_file(&log_path);
    }

    #[tokio::test]
    async fn non_get_method_is_404() {
        let state = test_state("post", false);
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = handle_request(req, state).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn static_asset_served_before_routes() {
        let state = test_state("static", false);
        let resp = handle_request(get("/css/styles.css"), state).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
    }

    #[tokio::test]
    async fn maintenance_gate_short_circuits_every_path() {
        let state = test_state("maint", true);

        for path in ["/", "/about", "/bad", "/nonexistent-path"] {
            let resp = handle_request(get(path), Arc::clone(&state)).await.unwrap();
            assert_eq!(resp.status(), 200, "path: {path}");
            assert!(body_text(resp).await.contains("Maintenance"), "path: {path}");
        }
    }

    #[tokio::test]
    async fn head_request_elides_body() {
        let state = test_state("head", false);
        let req = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = handle_request(req, state).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.is_empty());
    }
}
