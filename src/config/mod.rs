//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (target, candidate paths, timeouts)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, Opt};
