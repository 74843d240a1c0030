use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod render;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Single-threaded event-driven dispatch: one request at a time through
    // the pipeline, connections multiplexed on a LocalSet
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::bind_listener(addr)?;

    let renderer = render::Renderer::from_views_dir(&cfg.site.views_dir)?;
    let request_log = logger::RequestLog::spawn(cfg.logging.request_log_file.clone());

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::SiteState::new(cfg, renderer, request_log));

    // Routes point at templates by name; catch a missing one now rather than
    // as a 500 on the first request
    for template in state.routes.templates() {
        if !state.renderer.has_template(template) {
            logger::log_warning(&format!("Route template '{template}' is not registered"));
        }
    }

    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}
