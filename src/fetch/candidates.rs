//! Presence checks for well-known asset paths.

use log::debug;

use super::{join_path, redirects::follow_redirects};
use crate::error_handling::{ProbeError, ProbeErrorKind};

/// What happened when a candidate path was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// The final response was 200 OK.
    Found,
    /// The final response had some other status.
    Missing(u16),
    /// The request never produced a final response.
    Failed(ProbeErrorKind),
}

impl CandidateOutcome {
    /// Whether the candidate exists (final status 200).
    pub fn is_found(&self) -> bool {
        matches!(self, CandidateOutcome::Found)
    }
}

/// Requests `base_url + path` and classifies the result.
///
/// Never fails: errors are folded into `CandidateOutcome::Failed` and logged at
/// debug level so the caller can move on to the next candidate.
pub async fn probe_candidate(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    max_redirects: usize,
) -> CandidateOutcome {
    let outcome = match try_probe(client, base_url, path, max_redirects).await {
        Ok(200) => CandidateOutcome::Found,
        Ok(status) => CandidateOutcome::Missing(status),
        Err(e) => {
            debug!("Candidate {path} failed ({}): {e}", e.kind());
            CandidateOutcome::Failed(e.kind())
        }
    };
    debug!("Candidate {path}: {outcome:?}");
    outcome
}

async fn try_probe(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    max_redirects: usize,
) -> Result<u16, ProbeError> {
    let url = join_path(base_url, path)?;
    let (response, _history) = follow_redirects(client, url, max_redirects).await?;
    Ok(response.status().as_u16())
}
