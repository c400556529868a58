//! Configuration constants.
//!
//! The probe target and the paths it checks are fixed; only ambient settings
//! (logging, timeouts, user agent) are adjustable at runtime.

use std::time::Duration;

/// Site probed when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://kenal-admin.netlify.app";

/// Sub-path fetched after the root page to report its status.
pub const LOGIN_PATH: &str = "/login";

/// Inline script fragment that marks a Next.js chunk loader.
pub const CHUNK_MARKER: &str = "static/chunks";

/// Candidate asset and manifest paths, probed in this order.
pub const CANDIDATE_PATHS: [&str; 5] = [
    "/_next/static/chunks/webpack.js",
    "/_next/static/chunks/main.js",
    "/_next/static/chunks/pages/_app.js",
    "/manifest.json",
    "/build-manifest.json",
];

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout. Capped by the per-request timeout when that is lower.
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum redirect hops followed for a single fetch
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Status codes treated as redirects when a `Location` header is present
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// Maximum length of a response body preview included in debug logs
pub const MAX_BODY_PREVIEW_CHARS: usize = 200;
