//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT};

/// Initializes the HTTP client used for every probe request.
///
/// Creates a `reqwest::Client` with redirects disabled so the redirect chain can
/// be followed and recorded manually (see `fetch::fetch_page`). The client has
/// both a request timeout from the configuration and a connect timeout, so an
/// unresponsive host cannot hang the run.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .connect_timeout(TCP_CONNECT_TIMEOUT.min(timeout))
        .user_agent(config.user_agent.clone())
        .build()
}
