//! Probe orchestration.
//!
//! Runs the steps in a fixed order and prints as it goes:
//! 1. root page status (and redirect chain, if any)
//! 2. inline scripts referencing Next.js chunks
//! 3. login page status
//! 4. JavaScript preload links on the root page
//! 5. presence of well-known bundle and manifest paths
//!
//! A failure in steps 1-4 ends the run with a single `Error:` line. Candidate
//! probes in step 5 never end the run.

mod report;
mod summary;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use scraper::Html;

use crate::config::{Config, CANDIDATE_PATHS, LOGIN_PATH};
use crate::error_handling::{InitializationError, ProbeError};
use crate::fetch::{fetch_page, probe_candidate};
use crate::initialization::init_client;
use crate::parse::{count_chunk_scripts, extract_preload_scripts};

pub use report::Report;
pub use summary::ProbeSummary;

/// Validates `config`, builds the HTTP client, and probes the site.
///
/// Probe failures do not make this function fail; they are printed to `out`
/// and recorded in `ProbeSummary::error`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be
/// built, or `out` cannot be written to.
///
/// # Example
///
/// ```no_run
/// use site_probe::{run_probe, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let summary = run_probe(&Config::default(), std::io::stdout()).await?;
/// println!("{} candidate paths found", summary.found_paths.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_probe<W: Write>(config: &Config, out: W) -> Result<ProbeSummary> {
    config.validate().context("Invalid configuration")?;
    let client = init_client(config)
        .map_err(InitializationError::from)
        .context("Failed to initialize HTTP client")?;
    probe_site(&client, config, out)
        .await
        .context("Failed to write probe report")
}

/// Probes `config.base_url` with an existing client, writing the report to `out`.
///
/// The client is expected to have redirects disabled; redirect chains are
/// followed and recorded by the fetch layer.
///
/// # Errors
///
/// Only fails if the header or the final error line cannot be written.
pub async fn probe_site<W: Write>(
    client: &reqwest::Client,
    config: &Config,
    out: W,
) -> io::Result<ProbeSummary> {
    let started = Instant::now();
    let mut report = Report::new(out);
    let mut summary = ProbeSummary::default();

    info!("Probing {}", config.base_url);
    report.header(&config.base_url)?;

    if let Err(e) = inspect_site(client, config, &mut report, &mut summary).await {
        warn!("Probe of {} aborted ({}): {e}", config.base_url, e.kind());
        let message = e.to_string();
        report.error(&message)?;
        summary.error = Some(message);
    }
    report.flush()?;

    info!(
        "Probe of {} finished in {:.2}s ({} candidate paths found)",
        config.base_url,
        started.elapsed().as_secs_f64(),
        summary.found_paths.len()
    );
    Ok(summary)
}

async fn inspect_site<W: Write>(
    client: &reqwest::Client,
    config: &Config,
    report: &mut Report<W>,
    summary: &mut ProbeSummary,
) -> Result<(), ProbeError> {
    let root = fetch_page(client, &config.base_url, "/", config.max_redirects).await?;
    report.root_status(root.status)?;
    summary.root_status = Some(root.status);

    if let Some(first) = root.redirect_history.first() {
        report.redirect(first, &root.final_url)?;
    }
    summary.redirect_history = root.redirect_history;
    summary.final_url = Some(root.final_url);

    // Html is not Send, so both scans finish before the next request
    let (chunk_scripts, preload_scripts) = {
        let document = Html::parse_document(&root.body);
        (
            count_chunk_scripts(&document),
            extract_preload_scripts(&document),
        )
    };
    debug!("{chunk_scripts} chunk scripts, preload scripts: {preload_scripts:?}");

    for _ in 0..chunk_scripts {
        report.chunk_script()?;
    }
    summary.chunk_scripts = chunk_scripts;

    let login = fetch_page(client, &config.base_url, LOGIN_PATH, config.max_redirects).await?;
    report.login_status(login.status)?;
    summary.login_status = Some(login.status);

    report.preload_scripts(preload_scripts.len())?;
    summary.preload_scripts = preload_scripts;

    report.candidates_header()?;
    for path in CANDIDATE_PATHS {
        let outcome =
            probe_candidate(client, &config.base_url, path, config.max_redirects).await;
        if outcome.is_found() {
            report.candidate_found(path)?;
            summary.found_paths.push(path.to_string());
        }
    }

    Ok(())
}
