// Server module entry point
// Listener setup and the accept loop

mod connection;
mod listener;

pub use listener::bind_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::SiteState;
use crate::logger;

/// Accept connections until process termination.
///
/// Each accepted stream is served on its own local task; accept errors are
/// logged and the loop continues. There is no shutdown state.
pub async fn run(
    listener: TcpListener,
    state: Arc<SiteState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => connection::serve(stream, peer_addr, Arc::clone(&state)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
