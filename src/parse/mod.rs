//! HTML inspection of the root document.
//!
//! Two heuristics, both run over an already parsed `scraper::Html`:
//! - inline scripts mentioning the Next.js chunk loader
//! - `<link rel="preload">` tags pointing at JavaScript files

mod links;
mod scripts;

// Re-export public API
pub use links::extract_preload_scripts;
pub use scripts::{count_chunk_scripts, count_scripts_containing};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
