//! Error categorization.

use super::types::ProbeErrorKind;

/// Categorizes a `reqwest::Error` into a `ProbeErrorKind`.
///
/// Status errors never reach here: the probe reads status codes off the
/// response instead of turning them into errors.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeErrorKind {
    if error.is_builder() {
        ProbeErrorKind::Builder
    } else if error.is_redirect() {
        ProbeErrorKind::Redirect
    } else if error.is_timeout() {
        ProbeErrorKind::Timeout
    } else if error.is_connect() {
        ProbeErrorKind::Connect
    } else if error.is_body() {
        ProbeErrorKind::Body
    } else if error.is_decode() {
        ProbeErrorKind::Decode
    } else if error.is_request() {
        ProbeErrorKind::Request
    } else {
        ProbeErrorKind::Other
    }
}

/// Renders a `reqwest::Error` with its kind and full cause chain.
///
/// reqwest's own `Display` stops at "error sending request for url (...)",
/// which reads the same for a timeout and a refused connection.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let mut message = format!("{} ({error})", categorize_reqwest_error(error));
    let mut cause = std::error::Error::source(error);
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = std::error::Error::source(inner);
    }
    message
}
