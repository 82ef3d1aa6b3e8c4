// src/extract/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the way
//   browsers do, so a malformed page still yields its links
//
// We also use the `url` crate to:
// - Resolve relative URLs to absolute URLs against the page's own URL
// - Strip #fragments so "page#a" and "page#b" count as one page
//
// Note that we do NOT filter by scheme here. A mailto: link is still a link;
// deciding whether it is worth crawling is the validator's job.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::LinkExtractor;

/// LinkExtractor that reads `<a href="...">` elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Vec<String> {
        extract_html_links(html, base_url)
    }
}

// Extracts all links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page (for resolving relative links)
//
// Returns: Vec<String> containing all absolute URLs found, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
fn extract_html_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the base URL once
    // We'll use this to resolve relative links
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(url = %base_url, "Invalid base URL, skipping link extraction: {}", e);
            return links;
        }
    };

    // "a[href]" is a constant, valid selector
    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    let document = Html::parse_document(html);

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match resolve_url(&base, href) {
                Some(absolute_url) => links.push(absolute_url),
                None => tracing::debug!(href, base = %base, "Could not resolve link"),
            }
        }
    }

    tracing::debug!("Extracted {} links from {}", links.len(), base);
    links
}

// Resolves a possibly-relative URL to an absolute URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
//   href = "/docs#intro" -> Some("https://example.com/docs")
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let mut url = base.join(href.trim()).ok()?;
    url.set_fragment(None);
    Some(url.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does base.join(href) do?
//    - Resolves href the way a browser would, relative to the page URL
//    - "/docs" replaces the path, "docs" replaces the last segment,
//      "https://other.com" ignores the base entirely
//
// 2. What is `let Ok(x) = ... else { ... };`?
//    - let-else: bind x if the pattern matches, otherwise run the else
//      block, which must return (or break, or continue)
//
// 3. Why does tracing::debug! have `href,` before the message?
//    - Those are structured fields; subscribers can print or filter on them
// -----------------------------------------------------------------------------
