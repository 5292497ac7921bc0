pub mod proxy;
pub mod state;
pub mod web;
