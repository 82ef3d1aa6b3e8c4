// src/crawl/config.rs
// =============================================================================
// Settings for one crawl.
//
// A CrawlConfig is built once, before crawling starts, and never changes
// afterwards. The builder-style `with_*` methods consume and return the
// config so settings can be chained:
//
//   CrawlConfig::new("https://example.com")
//       .with_same_domain_only(true)
//       .with_max_concurrent(8)
// =============================================================================

use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    seed_url: String,
    base_domain: String,
    same_domain_only: bool,
    max_concurrent: usize,
    max_pages: Option<usize>,
    crawl_timeout: Option<Duration>,
}

impl CrawlConfig {
    /// Creates a config for crawling from `seed_url`.
    ///
    /// The base domain is the seed's host (plus port, when it isn't the
    /// scheme's default). A seed that doesn't parse gets an empty base
    /// domain; the crawl will still try it and log the failure.
    pub fn new(seed_url: impl Into<String>) -> Self {
        let seed_url = seed_url.into();
        let base_domain = Url::parse(&seed_url)
            .ok()
            .and_then(|url| host_key(&url))
            .unwrap_or_default();

        Self {
            seed_url,
            base_domain,
            same_domain_only: false,
            max_concurrent: 1,
            max_pages: None,
            crawl_timeout: None,
        }
    }

    pub fn with_same_domain_only(mut self, same_domain_only: bool) -> Self {
        self.same_domain_only = same_domain_only;
        self
    }

    /// Sets the concurrency limit. Zero would stall the crawl, so it's raised to one.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Caps the number of pages visited. The seed always gets tried, so zero is raised to one.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages.map(|max| max.max(1));
        self
    }

    pub fn with_crawl_timeout(mut self, crawl_timeout: Option<Duration>) -> Self {
        self.crawl_timeout = crawl_timeout;
        self
    }

    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    pub fn same_domain_only(&self) -> bool {
        self.same_domain_only
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }

    pub fn crawl_timeout(&self) -> Option<Duration> {
        self.crawl_timeout
    }
}

// "host" or "host:port" for a URL, lowercase.
// Default ports are left off because Url::port() hides them.
pub(crate) fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://example.com");
        assert_eq!(config.seed_url(), "https://example.com");
        assert_eq!(config.base_domain(), "example.com");
        assert!(!config.same_domain_only());
        assert_eq!(config.max_concurrent(), 1);
        assert_eq!(config.max_pages(), None);
        assert_eq!(config.crawl_timeout(), None);
    }

    #[test]
    fn test_base_domain_keeps_explicit_port() {
        let config = CrawlConfig::new("http://127.0.0.1:8080/start");
        assert_eq!(config.base_domain(), "127.0.0.1:8080");
    }

    #[test]
    fn test_base_domain_drops_default_port() {
        let config = CrawlConfig::new("https://Example.COM:443/");
        assert_eq!(config.base_domain(), "example.com");
    }

    #[test]
    fn test_unparseable_seed_has_empty_base_domain() {
        let config = CrawlConfig::new("not a url");
        assert_eq!(config.seed_url(), "not a url");
        assert_eq!(config.base_domain(), "");
    }

    #[test]
    fn test_zero_max_pages_is_raised_to_one() {
        let config = CrawlConfig::new("https://example.com").with_max_pages(Some(0));
        assert_eq!(config.max_pages(), Some(1));

        let config = CrawlConfig::new("https://example.com").with_max_pages(Some(25));
        assert_eq!(config.max_pages(), Some(25));
    }

    #[test]
    fn test_zero_concurrency_is_raised_to_one() {
        let config = CrawlConfig::new("https://example.com").with_max_concurrent(0);
        assert_eq!(config.max_concurrent(), 1);
    }
}
