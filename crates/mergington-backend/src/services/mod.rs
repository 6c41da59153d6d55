//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction over the activity
//! directory and its in-memory implementation, which is what the server runs
//! with since the directory is not persisted.

pub mod activities;

pub use activities::*;
