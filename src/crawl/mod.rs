// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Bounded concurrency: each round fetches up to N pages at once
// - Optional same-domain restriction (seed host and its subdomains)
// - Optional page limit and overall deadline
//
// Submodules:
// - config: CrawlConfig, the immutable settings for one crawl
// - validate: UrlValidator, which links may enter the queue
// - queue: frontier + visited set bookkeeping
// - crawler: the Crawler session and its round-by-round loop
// =============================================================================

mod config;
mod crawler;
mod queue;
mod validate;

pub use config::CrawlConfig;
pub use crawler::{CrawlStats, Crawler};
