//! HTTP serving: router, handlers, middleware, server shell.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
