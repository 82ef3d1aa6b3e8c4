// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging at the requested level
// 3. Build the HTTP fetcher and run the crawl
// 4. Print the sorted list of visited URLs
//
// Exit codes:
// - 0: crawl finished (even if some pages failed; failures are only logged)
// - 1: internal error (e.g. the HTTP client could not be built)
// - 2: invalid command-line arguments, reported by clap before anything runs
// =============================================================================

mod cli;
mod crawl;
mod extract;
mod fetch;
mod logging;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::time::Duration;

use cli::Cli;
use crawl::{CrawlConfig, CrawlStats, Crawler};
use extract::HtmlLinkExtractor;
use fetch::{HttpFetcher, HttpFetcherConfig};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    // An invalid --error-level (or any other bad flag) exits here,
    // before a single request is made
    let cli = Cli::parse();

    logging::init_logging(cli.error_level);

    let max_concurrent = cli.max_concurrent_processes as usize;

    let config = CrawlConfig::new(cli.base_url.as_str())
        .with_same_domain_only(cli.same_domain_only)
        .with_max_concurrent(max_concurrent)
        .with_max_pages(cli.max_pages.map(|max| usize::try_from(max).unwrap_or(usize::MAX)))
        .with_crawl_timeout(cli.crawl_timeout.map(Duration::from_secs));

    let fetcher = HttpFetcher::new(&HttpFetcherConfig {
        request_timeout: Duration::from_secs(cli.request_timeout),
        pool_size: max_concurrent,
        ..HttpFetcherConfig::default()
    })?;

    let crawler = Crawler::new(config, fetcher, HtmlLinkExtractor);
    let visited = crawler.crawl().await;
    let stats = crawler.stats();

    tracing::info!(
        visited = visited.len(),
        fetched = stats.pages_fetched,
        failed = stats.pages_failed,
        rounds = stats.rounds,
        "Crawl finished in {:.2}s",
        stats.elapsed_secs
    );

    let mut urls: Vec<String> = visited.into_iter().collect();
    urls.sort();

    print_results(&urls, &stats, cli.json)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    visited: &'a [String],
    stats: &'a CrawlStats,
}

// Prints the results either as a plain list or JSON
fn print_results(urls: &[String], stats: &CrawlStats, json: bool) -> Result<()> {
    if json {
        let output = JsonOutput {
            visited: urls,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\nCrawled URLs:");
        for url in urls {
            println!("{}", url);
        }
    }
    Ok(())
}
