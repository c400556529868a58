//! Inline script scanning.

use log::debug;
use scraper::Html;

use crate::config::CHUNK_MARKER;
use crate::utils::parse_selector_with_fallback;

/// Counts `<script>` elements whose inline text contains `marker`.
///
/// Each matching script counts once no matter how often the marker repeats
/// inside it. Scripts with no inline text (e.g. `<script src=...>`) never match.
pub fn count_scripts_containing(document: &Html, marker: &str) -> usize {
    let selector = parse_selector_with_fallback("script", "inline script scan");
    let mut matches = 0;
    for (index, element) in document.select(&selector).enumerate() {
        let text = element.text().collect::<String>();
        if !text.is_empty() && text.contains(marker) {
            debug!("Script #{index} contains '{marker}'");
            matches += 1;
        }
    }
    matches
}

/// Counts inline scripts that reference the Next.js chunk loader.
pub fn count_chunk_scripts(document: &Html) -> usize {
    count_scripts_containing(document, CHUNK_MARKER)
}
