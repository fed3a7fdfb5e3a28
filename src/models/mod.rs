//! Response models for the cache server API
//!
//! Values travel as plain text; only error bodies are structured.

pub mod responses;

pub use responses::ErrorResponse;
