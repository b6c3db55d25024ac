//! Infrastructure layer
//!
//! Process-level concerns that sit outside the domain: tracing setup and
//! shutdown signal handling.

pub mod shutdown;
pub mod telemetry;

pub use shutdown::shutdown_signal;
pub use telemetry::init_tracing;
