//! Application services and startup orchestration
//!
//! This module wires configuration, the activity directory and the HTTP
//! router into a runnable server.

pub mod app;

pub use app::Application;
