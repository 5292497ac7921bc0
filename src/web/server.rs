//! Server shell: binds the listener and runs the router until the process is
//! terminated.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use super::routes;
use crate::proxy::{UpstreamClient, BACKEND_ORIGIN};
use crate::state::AppState;

/// Default entry page named in the startup banner.
pub const ENTRY_PAGE: &str = "color-curator.html";

pub struct WebServer {
    port: u16,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(port: u16, static_dir: PathBuf) -> Self {
        let state = Arc::new(AppState::new(
            UpstreamClient::new(BACKEND_ORIGIN),
            static_dir,
        ));
        Self { port, state }
    }

    /// Serve forever. There is no graceful shutdown; the process is expected
    /// to be killed from the terminal.
    pub async fn run(self) -> Result<(), String> {
        let app = routes::build_router(self.state.clone());

        let bind_addr = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string());
        let addr: SocketAddr = format!("{}:{}", bind_addr, self.port)
            .parse()
            .map_err(|e| format!("invalid bind address: {}", e))?;

        println!("\n✅ Color Curator Server Running");
        println!("📍 Open: http://localhost:{}/{}\n", self.port, ENTRY_PAGE);
        tracing::info!(
            "serving {:?}, forwarding /api/ to {}",
            self.state.static_dir,
            BACKEND_ORIGIN
        );

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| format!("failed to bind {}: {}", addr, e))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| format!("server error: {}", e))?;

        Ok(())
    }
}
