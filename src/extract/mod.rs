// src/extract/mod.rs
// =============================================================================
// This module turns a fetched page into the list of links it points at.
//
// Like fetching, extraction sits behind a small trait (`LinkExtractor`) so
// the crawler does not care which HTML parser does the work.
//
// Submodules:
// - html: Extracts <a href> targets using the `scraper` crate
// =============================================================================

mod html;

pub use html::HtmlLinkExtractor;

/// Anything that can pull hyperlink targets out of a page.
///
/// Implementations must be best effort: malformed markup yields whatever
/// links could be recovered, never a panic or an error.
pub trait LinkExtractor: Send + Sync {
    /// Returns absolute URLs in document order. Duplicates are kept.
    fn extract(&self, html: &str, base_url: &str) -> Vec<String>;
}
