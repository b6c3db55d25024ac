//! Mergington Activities - extracurricular signup service
//!
//! Lists Mergington High School's activities and lets students sign up for
//! or drop out of them by email. Rosters live in memory and reset on restart.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
