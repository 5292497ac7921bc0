use std::path::PathBuf;

use crate::proxy::UpstreamClient;

/// Shared per-server state. Nothing here mutates across requests; the only
/// process-wide resource is the listening socket owned by the server loop.
pub struct AppState {
    pub upstream: UpstreamClient,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(upstream: UpstreamClient, static_dir: PathBuf) -> Self {
        Self {
            upstream,
            static_dir,
        }
    }
}
