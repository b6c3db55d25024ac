//! Domain types and business rules for activity signups
//!
//! This module contains the activity records, the directory that owns them,
//! and the validated newtypes used at its boundary.

pub mod activity;
pub mod config_types;
pub mod directory;
pub mod seed;
pub mod types;

pub use activity::{Activity, CapacityPolicy, RosterError};
pub use directory::{ActivityDirectory, DirectoryError, DirectorySnapshot, RosterChange};
pub use types::*;
