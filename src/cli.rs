// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The crawler takes one positional argument (the seed URL) plus a handful of
// flags that control how wide and how far the crawl goes.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate parsing code for our types
// - ValueEnum: Restricts an option to a fixed set of values
// =============================================================================

use clap::Parser;

use crate::logging::LogLevel;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "fast-crawler",
    version = "0.1.0",
    about = "Fast Web Crawler",
    long_about = "fast-crawler visits every page reachable from a starting URL, \
                  breadth first, and prints the sorted list of pages it visited."
)]
pub struct Cli {
    /// Starting URL for the crawler
    ///
    /// This is a positional argument (required, no flag needed)
    pub base_url: String,

    /// Only crawl pages on the same domain (or its subdomains)
    #[arg(long)]
    pub same_domain_only: bool,

    /// Maximum number of concurrent fetches
    ///
    /// Each crawl round takes at most this many URLs from the queue.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_concurrent_processes: u32,

    /// Logging level
    ///
    /// Logs go to stderr so they never mix with the crawled URL list.
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    pub error_level: LogLevel,

    /// Stop after this many pages have been visited (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: Option<u64>,

    /// Give up on the whole crawl after this many seconds
    #[arg(long, value_name = "SECS")]
    pub crawl_timeout: Option<u64>,

    /// Timeout for a single HTTP request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub request_timeout: u64,

    /// Output results in JSON format instead of a plain list
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fast-crawler", "https://example.com"]).unwrap();
        assert_eq!(cli.base_url, "https://example.com");
        assert!(!cli.same_domain_only);
        assert_eq!(cli.max_concurrent_processes, 1);
        assert_eq!(cli.error_level, LogLevel::Error);
        assert_eq!(cli.max_pages, None);
        assert_eq!(cli.request_timeout, 10);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "fast-crawler",
            "https://example.com",
            "--same-domain-only",
            "--max-concurrent-processes",
            "8",
            "--error-level",
            "DEBUG",
            "--max-pages",
            "100",
        ])
        .unwrap();
        assert!(cli.same_domain_only);
        assert_eq!(cli.max_concurrent_processes, 8);
        assert_eq!(cli.error_level, LogLevel::Debug);
        assert_eq!(cli.max_pages, Some(100));
    }

    #[test]
    fn test_invalid_error_level_is_rejected() {
        let result = Cli::try_parse_from([
            "fast-crawler",
            "https://example.com",
            "--error-level",
            "VERBOSE",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_max_pages_is_rejected() {
        let result = Cli::try_parse_from([
            "fast-crawler",
            "https://example.com",
            "--max-pages",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let result = Cli::try_parse_from([
            "fast-crawler",
            "https://example.com",
            "--max-concurrent-processes",
            "0",
        ]);
        assert!(result.is_err());
    }
}
