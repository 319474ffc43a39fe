//! Shared types used across endpoints.

pub mod types;

pub use types::*;
