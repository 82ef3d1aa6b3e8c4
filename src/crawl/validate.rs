// src/crawl/validate.rs
// =============================================================================
// Decides whether a discovered link is allowed into the crawl queue.
//
// Rules:
// - Only http:// and https:// links are ever crawled
// - In same-domain mode, the link's host must be the seed's host or a
//   subdomain of it ("docs.example.com" is inside "example.com",
//   "notexample.com" is not)
//
// The validator is a pure function of the link and the config: no I/O,
// no state, same answer every time.
// =============================================================================

use url::Url;

use super::config::{host_key, CrawlConfig};

#[derive(Debug, Clone)]
pub struct UrlValidator {
    base_domain: String,
    same_domain_only: bool,
}

impl UrlValidator {
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            base_domain: config.base_domain().to_string(),
            same_domain_only: config.same_domain_only(),
        }
    }

    /// Returns true if `url` (already absolute) may be added to the queue.
    pub fn is_valid(&self, url: &str) -> bool {
        if !has_http_scheme(url) {
            return false;
        }

        if !self.same_domain_only {
            return true;
        }

        let Ok(parsed) = Url::parse(url) else {
            return false;
        };

        match host_key(&parsed) {
            Some(host) => is_same_or_subdomain(&host, &self.base_domain),
            None => false,
        }
    }
}

pub fn has_http_scheme(url: &str) -> bool {
    let starts_with = |prefix: &str| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with("https://")
}

// The leftover prefix must end in '.' so only whole labels match.
fn is_same_or_subdomain(host: &str, base: &str) -> bool {
    if base.is_empty() {
        return false;
    }
    if host == base {
        return true;
    }
    host.strip_suffix(base)
        .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(seed: &str, same_domain_only: bool) -> UrlValidator {
        UrlValidator::new(&CrawlConfig::new(seed).with_same_domain_only(same_domain_only))
    }

    #[test]
    fn test_same_domain_validation() {
        let v = validator("https://example.com", true);
        assert!(v.is_valid("https://example.com/x"));
        assert!(v.is_valid("https://example.com/page"));
        assert!(v.is_valid("https://sub.example.com/x"));
        assert!(v.is_valid("https://a.b.example.com/x"));
        assert!(!v.is_valid("https://other.com"));
        assert!(!v.is_valid("https://other-domain.com"));
    }

    #[test]
    fn test_suffix_without_label_boundary_is_rejected() {
        let v = validator("https://example.com", true);
        assert!(!v.is_valid("https://notexample.com/"));
        assert!(!v.is_valid("https://example.com.evil.org/"));
    }

    #[test]
    fn test_parent_domain_is_rejected() {
        let v = validator("https://docs.example.com", true);
        assert!(!v.is_valid("https://example.com/"));
    }

    #[test]
    fn test_any_http_url_when_not_restricted() {
        let v = validator("https://example.com", false);
        assert!(v.is_valid("https://other.com"));
        assert!(v.is_valid("http://example.org/page"));
    }

    #[test]
    fn test_non_http_schemes_always_rejected() {
        for same_domain_only in [false, true] {
            let v = validator("https://example.com", same_domain_only);
            assert!(!v.is_valid("mailto:test@example.com"));
            assert!(!v.is_valid("ftp://example.com/file"));
            assert!(!v.is_valid("javascript:void(0)"));
            assert!(!v.is_valid("/relative/path"));
        }
    }

    #[test]
    fn test_port_is_part_of_the_domain() {
        let v = validator("http://localhost:8080", true);
        assert!(v.is_valid("http://localhost:8080/a"));
        assert!(!v.is_valid("http://localhost:9090/a"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let v = validator("https://example.com", true);
        for url in ["https://example.com/x", "https://other.com", "mailto:x@y.z"] {
            assert_eq!(v.is_valid(url), v.is_valid(url));
        }
    }

    #[test]
    fn test_scheme_check_ignores_case() {
        assert!(has_http_scheme("HTTPS://example.com"));
        assert!(has_http_scheme("http://example.com"));
        assert!(!has_http_scheme("httpx://example.com"));
        assert!(!has_http_scheme("http"));
    }
}
