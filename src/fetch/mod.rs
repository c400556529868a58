//! HTTP fetching.
//!
//! All requests go through a client with redirects disabled; redirect chains are
//! followed in [`redirects`] so the history can be reported.

mod candidates;
mod redirects;

use log::debug;
use reqwest::Url;

use crate::config::MAX_BODY_PREVIEW_CHARS;
use crate::error_handling::ProbeError;
use crate::utils::preview;

pub use candidates::{probe_candidate, CandidateOutcome};
pub use redirects::follow_redirects;

/// A fetched page after all redirects were followed.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Status code of the final response
    pub status: u16,
    /// URL of the final response
    pub final_url: String,
    /// URLs that answered with a redirect, in the order they were visited
    pub redirect_history: Vec<String>,
    /// Body of the final response, decoded as text
    pub body: String,
}

impl PageResponse {
    /// Whether at least one redirect was followed.
    pub fn was_redirected(&self) -> bool {
        !self.redirect_history.is_empty()
    }
}

/// Appends `path` to `base_url` and parses the result.
///
/// A trailing slash on the base is dropped first so `https://host/` and
/// `https://host` both produce `https://host/login` for `/login`.
///
/// # Errors
///
/// Returns `ProbeError::InvalidUrl` if the combined text is not a valid URL.
pub fn join_path(base_url: &str, path: &str) -> Result<Url, ProbeError> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|source| ProbeError::InvalidUrl {
        url: joined,
        source,
    })
}

/// Fetches `base_url + path`, following redirects, and reads the body.
///
/// # Errors
///
/// Returns a `ProbeError` if the URL is invalid, a request fails, the redirect
/// budget is exhausted, or the body cannot be read.
pub async fn fetch_page(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    max_redirects: usize,
) -> Result<PageResponse, ProbeError> {
    let url = join_path(base_url, path)?;
    let (response, redirect_history) = follow_redirects(client, url, max_redirects).await?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|source| ProbeError::Request {
            url: final_url.clone(),
            source,
        })?;

    debug!(
        "Fetched {final_url} ({status}, {} bytes): {}",
        body.len(),
        preview(&body, MAX_BODY_PREVIEW_CHARS)
    );

    Ok(PageResponse {
        status,
        final_url,
        redirect_history,
        body,
    })
}
