//! The shared library for Mergington, the extracurricular activity sign-up service.
//!
//! This library provides the core types used by the backend, including typed ids,
//! activity records, request/response shapes, error handling, and logging.

pub mod data;
pub mod errors;
pub mod id;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
