//! HTTP redirect chain resolution.
//!
//! The client has redirects disabled, so chains are followed here and every URL
//! that answered with a redirect is recorded.

use log::{debug, warn};
use reqwest::{Response, Url};

use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::ProbeError;

/// Sends a GET to `start_url`, following redirects up to `max_hops` times.
///
/// # Returns
///
/// The first non-redirect response and the URLs that were redirected away
/// from, in order. The history is empty when no redirect happened.
///
/// # Errors
///
/// Returns `ProbeError::Request` if any hop fails, `ProbeError::InvalidUrl` if a
/// `Location` header cannot be resolved, and `ProbeError::TooManyRedirects` when
/// the chain is longer than `max_hops`.
pub async fn follow_redirects(
    client: &reqwest::Client,
    start_url: Url,
    max_hops: usize,
) -> Result<(Response, Vec<String>), ProbeError> {
    let mut history: Vec<String> = Vec::new();
    let mut current = start_url;

    loop {
        let resp = client
            .get(current.clone())
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: current.to_string(),
                source,
            })?;

        let Some(next) = redirect_target(&resp, &current)? else {
            return Ok((resp, history));
        };

        if history.len() >= max_hops {
            let start = history
                .first()
                .cloned()
                .unwrap_or_else(|| current.to_string());
            return Err(ProbeError::TooManyRedirects {
                url: start,
                limit: max_hops,
            });
        }

        debug!("{} {} -> {}", resp.status().as_u16(), current, next);
        history.push(current.to_string());
        current = next;
    }
}

/// Returns the URL a redirect response points at, or `None` if `resp` is final.
///
/// A redirect status without a usable `Location` header is treated as final.
fn redirect_target(resp: &Response, current: &Url) -> Result<Option<Url>, ProbeError> {
    let status_code = resp.status().as_u16();
    if !REDIRECT_STATUS_CODES.contains(&status_code) {
        return Ok(None);
    }

    let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
        warn!("Redirect status {status_code} for {current} but no Location header");
        return Ok(None);
    };

    let Ok(loc) = loc.to_str() else {
        warn!("Redirect status {status_code} for {current} has a non-UTF-8 Location header");
        return Ok(None);
    };

    // join() also accepts absolute URLs
    current
        .join(loc)
        .map(Some)
        .map_err(|source| ProbeError::InvalidUrl {
            url: loc.to_string(),
            source,
        })
}
