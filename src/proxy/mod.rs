//! Forwarding of `/api/` traffic to the remote backend.

pub mod upstream;

pub use upstream::{UpstreamClient, UpstreamError, BACKEND_ORIGIN};
