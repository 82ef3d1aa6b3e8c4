// src/fetch/http.rs
// =============================================================================
// The real HTTP fetcher, built on reqwest.
//
// Key functionality:
// - Makes HTTP GET requests and returns status + body text
// - Follows redirects transparently (up to a configurable limit)
// - Keeps a connection pool sized to the crawl's concurrency
// - Turns reqwest's many failure modes into a short, readable description
//
// Rust concepts:
// - async/await: For non-blocking network I/O
// - Traits: HttpFetcher implements the Fetcher trait from mod.rs
// - anyhow::Context: Attaching a human-readable description to an error
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{FetchResponse, Fetcher};

/// Settings for the reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Timeout for a whole request (connect + headers + body)
    pub request_timeout: Duration,
    /// Timeout for establishing the TCP/TLS connection
    pub connect_timeout: Duration,
    /// How many redirects to follow before giving up
    pub max_redirects: usize,
    /// Idle connections kept per host; matches the crawl concurrency
    pub pool_size: usize,
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            max_redirects: 10,
            pool_size: 1,
            user_agent: format!("fast-crawler/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetcher backed by a pooled reqwest client.
///
/// Client is cheap to clone (it's an Arc internally), so HttpFetcher is too.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpFetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .pool_max_idle_per_host(config.pool_size.max(1))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let description = describe_error(&e);
                return Err(anyhow::Error::new(e).context(description));
            }
        };

        let status = response.status().as_u16();

        // The body is read under the same request timeout
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let description = describe_error(&e);
                return Err(anyhow::Error::new(e).context(description));
            }
        };

        Ok(FetchResponse::new(status, body))
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string().to_lowercase();

    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            "Connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else if error.is_builder() {
        "Invalid URL".to_string()
    } else if error.is_body() || error.is_decode() {
        "Failed to read response body".to_string()
    } else {
        "Request failed".to_string()
    }
}
