//! Property-based tests for directory invariants
//!
//! These tests use property-based testing to verify that roster invariants
//! hold across arbitrary sequences of signups and unregisters.

mod roster_invariants;
