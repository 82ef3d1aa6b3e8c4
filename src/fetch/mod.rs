// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only window onto the network.
//
// The crawler never talks to reqwest directly. It talks to the `Fetcher`
// trait, which has exactly one operation: GET a URL and hand back the status
// code and the body text. That makes it easy to drop in a fake fetcher in
// tests and check the crawl logic without a network.
//
// Submodules:
// - http: The real reqwest-backed fetcher
// =============================================================================

mod http;

use anyhow::Result;
use async_trait::async_trait;

pub use http::{HttpFetcher, HttpFetcherConfig};

/// What came back from a single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Final HTTP status code (after any redirects were followed)
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only a plain 200 counts as a page we can read links from.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Anything that can GET a URL.
///
/// Errors are transport failures (connection refused, timeout, bad TLS, ...).
/// A response with a non-200 status is NOT an error at this level; the caller
/// decides what to do with it.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}
