//! site_probe library: quick reconnaissance of a single website
//!
//! Fetches the root page of a site, reports its status and redirect chain,
//! looks for Next.js chunk loaders in inline scripts, counts JavaScript preload
//! links, and checks a fixed list of bundle and manifest paths.
//!
//! # Example
//!
//! ```no_run
//! use site_probe::{run_probe, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     timeout_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let summary = run_probe(&config, std::io::stdout()).await?;
//! if let Some(error) = summary.error {
//!     eprintln!("probe aborted: {error}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
mod run;
mod utils;

// Re-export public API
pub use config::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, Opt};
pub use error_handling::{categorize_reqwest_error, InitializationError, ProbeError, ProbeErrorKind};
pub use run::{probe_site, run_probe, ProbeSummary, Report};
