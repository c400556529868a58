// Parse module tests.

use super::*;
use scraper::Html;

#[test]
fn test_chunk_script_detected_after_non_matching_scripts() {
    let html = r#"<html><head>
        <script>var a = 1;</script>
        <script>console.log("hello");</script>
        <script>self.__next_f.push(["/_next/static/chunks/app.js"])</script>
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(count_chunk_scripts(&document), 1);
}

#[test]
fn test_each_matching_script_counts_once() {
    let html = r#"<html><body>
        <script>load("static/chunks/a.js"); load("static/chunks/b.js");</script>
        <script>load("static/chunks/c.js");</script>
    </body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(count_chunk_scripts(&document), 2);
}

#[test]
fn test_external_script_src_is_not_inline_text() {
    // Only inline text is scanned, not the src attribute
    let html = r#"<html><head>
        <script src="/_next/static/chunks/main.js"></script>
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(count_chunk_scripts(&document), 0);
}

#[test]
fn test_no_scripts() {
    let document = Html::parse_document("<html><body><p>static/chunks</p></body></html>");
    assert_eq!(count_chunk_scripts(&document), 0);
}

#[test]
fn test_count_scripts_containing_custom_marker() {
    let html = r#"<script>window.__NUXT__={}</script><script>other</script>"#;
    let document = Html::parse_document(html);
    assert_eq!(count_scripts_containing(&document, "__NUXT__"), 1);
    assert_eq!(count_scripts_containing(&document, "missing"), 0);
}

#[test]
fn test_preload_scripts_only_js() {
    let html = r#"<html><head>
        <link rel="preload" href="/_next/static/chunks/main.js" as="script">
        <link rel="preload" href="/_next/static/css/app.css" as="style">
        <link rel="preload" href="/fonts/inter.woff2" as="font">
        <link rel="preload" href="/_next/static/chunks/webpack.js" as="script">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_preload_scripts(&document),
        vec![
            "/_next/static/chunks/main.js".to_string(),
            "/_next/static/chunks/webpack.js".to_string(),
        ]
    );
}

#[test]
fn test_preload_ignores_other_rel_values() {
    let html = r#"<html><head>
        <link rel="stylesheet" href="/app.js">
        <link rel="modulepreload" href="/module.js">
        <link rel="preload prefetch" href="/both.js">
        <link rel="preload">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_preload_scripts(&document), vec!["/both.js".to_string()]);
}

#[test]
fn test_preload_js_extension_must_be_suffix() {
    let html = r#"<html><head>
        <link rel="preload" href="/main.js?v=3">
        <link rel="preload" href="/main.json">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert!(extract_preload_scripts(&document).is_empty());
}

#[test]
fn test_preload_rel_token_is_case_sensitive() {
    let html = r#"<html><head>
        <link rel="PRELOAD" href="/a.js">
        <link rel="Preload" href="/b.js">
        <link rel="stylesheet  preload" href="/c.js">
    </head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_preload_scripts(&document), vec!["/c.js".to_string()]);
}
