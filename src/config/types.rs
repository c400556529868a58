//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for the binary.
///
/// The probe always completes; this only decides whether a run that ended in
/// the top-level error handler is reported through the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0
    Never,
    /// Exit 2 if the probe aborted with an error
    Error,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use site_probe::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Site to probe, without a trailing slash
    pub base_url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Redirect hops followed before a fetch fails
    pub max_redirects: usize,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            fail_on: FailOn::Never,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks the configuration before any request is made.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0 (e.g. --timeout-seconds 10)".to_string(),
            });
        }
        if self.max_redirects == 0 {
            return Err(ConfigValidationError {
                field: "max_redirects",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        match url::Url::parse(&self.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            Ok(parsed) => Err(ConfigValidationError {
                field: "base_url",
                message: format!(
                    "unsupported scheme '{}', expected http or https",
                    parsed.scheme()
                ),
            }),
            Err(e) => Err(ConfigValidationError {
                field: "base_url",
                message: format!("'{}' is not a valid URL: {e}", self.base_url),
            }),
        }
    }
}

/// Command-line options.
///
/// The probe target is fixed; only logging, timeout, user agent, and the exit
/// code policy can be changed.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// site_probe
///
/// # Verbose logs with a shorter timeout
/// site_probe --log-level debug --timeout-seconds 5
///
/// # Report an aborted run through the exit code
/// site_probe --fail-on error
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_probe",
    about = "Probes a website for redirects, Next.js chunks, and well-known asset paths."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Exit code policy: never|error
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            fail_on: opt.fail_on,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_zero_redirects() {
        let config = Config {
            max_redirects: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "max_redirects");
    }

    #[test]
    fn test_validate_rejects_blank_user_agent() {
        let config = Config {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "user_agent");
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = Config {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "base_url");
        assert!(err.message.contains("ftp"));

        let config = Config {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "base_url");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigValidationError {
            field: "timeout_seconds",
            message: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid timeout_seconds: must be greater than 0"
        );
    }

    #[test]
    fn test_opt_into_config_keeps_fixed_target() {
        let opt = Opt {
            log_level: LogLevel::Debug,
            log_format: LogFormat::Json,
            timeout_seconds: 3,
            user_agent: "probe/1.0".to_string(),
            fail_on: FailOn::Error,
        };
        let config = Config::from(opt);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.fail_on, FailOn::Error);
        assert_eq!(config.max_redirects, MAX_REDIRECT_HOPS);
    }
}
