//! Preload link extraction.

use scraper::Html;

use crate::utils::parse_selector_with_fallback;

/// Collects the `href` of every `<link>` whose `rel` includes `preload` and
/// whose target ends in `.js`, in document order.
///
/// `rel` is a space-separated token list, so `rel="preload prefetch"` counts.
/// Tokens are compared exactly; `rel="Preload"` does not count. The extension
/// check is case-sensitive and applies to the raw attribute value.
pub fn extract_preload_scripts(document: &Html) -> Vec<String> {
    let selector = parse_selector_with_fallback("link", "preload link scan");
    document
        .select(&selector)
        .filter(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel.split_ascii_whitespace().any(|token| token == "preload"))
        })
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.ends_with(".js"))
        .map(str::to_string)
        .collect()
}
