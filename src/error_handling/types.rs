//! Error type definitions.
//!
//! This module defines the error types used by initialization and by the probe
//! itself, plus the coarse failure classification used in logs.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures that abort a probe run.
///
/// The `Display` output is what ends up on the `Error:` line of the report.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {}", super::describe_reqwest_error(source))]
    Request {
        /// URL being fetched
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// A URL (base, joined path, or redirect target) could not be parsed.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// Offending URL text
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The redirect budget ran out before a non-redirect response arrived.
    #[error("too many redirects starting at {url} (limit {limit})")]
    TooManyRedirects {
        /// URL the chain started from
        url: String,
        /// Hop limit that was exceeded
        limit: usize,
    },

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ProbeError {
    /// Coarse classification of this failure, for logging.
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::Request { source, .. } => super::categorize_reqwest_error(source),
            ProbeError::InvalidUrl { .. } => ProbeErrorKind::InvalidUrl,
            ProbeError::TooManyRedirects { .. } => ProbeErrorKind::Redirect,
            ProbeError::Output(_) => ProbeErrorKind::Output,
        }
    }
}

/// Types of failures a single probe can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeErrorKind {
    /// Request or connect timeout elapsed
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Redirect chain too long or unresolvable
    Redirect,
    /// Request failed while being sent
    Request,
    /// Response body could not be read
    Body,
    /// Response body could not be decoded
    Decode,
    /// Request could not be built
    Builder,
    /// URL could not be parsed
    InvalidUrl,
    /// Report could not be written
    Output,
    /// Anything else
    Other,
}

impl std::fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeErrorKind {
    /// Returns a human-readable label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeErrorKind::Timeout => "HTTP request timeout error",
            ProbeErrorKind::Connect => "HTTP request connect error",
            ProbeErrorKind::Redirect => "HTTP request redirect error",
            ProbeErrorKind::Request => "HTTP request error",
            ProbeErrorKind::Body => "HTTP request body error",
            ProbeErrorKind::Decode => "HTTP request decode error",
            ProbeErrorKind::Builder => "HTTP request builder error",
            ProbeErrorKind::InvalidUrl => "Invalid URL",
            ProbeErrorKind::Output => "Report output error",
            ProbeErrorKind::Other => "HTTP request other error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_probe_error_kind_labels_are_unique() {
        let labels: HashSet<&str> = ProbeErrorKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(labels.len(), ProbeErrorKind::iter().count());
    }

    #[test]
    fn test_probe_error_kind_display_matches_as_str() {
        for kind in ProbeErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_too_many_redirects_message() {
        let err = ProbeError::TooManyRedirects {
            url: "https://example.com/".to_string(),
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "too many redirects starting at https://example.com/ (limit 10)"
        );
        assert_eq!(err.kind(), ProbeErrorKind::Redirect);
    }

    #[test]
    fn test_invalid_url_message_names_url() {
        let source = url::Url::parse("http://[::1").unwrap_err();
        let err = ProbeError::InvalidUrl {
            url: "http://[::1".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid URL 'http://[::1'"));
        assert_eq!(err.kind(), ProbeErrorKind::InvalidUrl);
    }
}
