//! # Suzerain Shared
//!
//! Common types used across all suzerain crates: the error taxonomy
//! and engine configuration.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
