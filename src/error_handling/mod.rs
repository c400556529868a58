//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and fetching
//! - Classification of client errors into coarse kinds for logging

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_reqwest_error};
pub use types::{InitializationError, ProbeError, ProbeErrorKind};
