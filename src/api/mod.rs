//! HTTP adapter for the activity directory
//!
//! Routes, handlers, middleware and the mapping from directory errors to
//! `{"detail": ...}` responses.

pub mod error_response;
pub mod headers;
pub mod middleware;
pub mod routes;


pub use error_response::{ApiError, ErrorResponse};
pub use routes::{router, AppState, MessageResponse};
