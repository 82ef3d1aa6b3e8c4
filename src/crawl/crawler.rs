// src/crawl/crawler.rs
// =============================================================================
// The crawl loop itself.
//
// How it works:
// 1. Start with the seed URL in the frontier
// 2. Take a batch of up to `max_concurrent` URLs from the front
// 3. Fetch every URL in the batch at the same time (bounded by a semaphore)
// 4. Extract links from each page, keep the valid new ones, queue them
// 5. Wait for the WHOLE batch to finish, then go back to 2
// 6. Stop when the frontier is empty
//
// Rounds are a hard barrier: nothing from round N+1 starts until every page
// in round N is done. A single slow page holds up the next round.
//
// Every failure (network error, bad status, anything else) is contained in
// the page that caused it. It gets logged, the URL still counts as visited,
// and the crawl carries on.
//
// Rust concepts:
// - Generics: Crawler<F, E> works with any Fetcher and LinkExtractor
// - Mutex: Guards the shared queue; never held across an .await
// - Semaphore: Counting gate that limits in-flight fetches
// - join_all: Runs a batch of futures concurrently and waits for all of them
// =============================================================================

use anyhow::{Context, Result};
use futures::future::join_all;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::Semaphore;

use super::config::CrawlConfig;
use super::queue::CrawlQueue;
use super::validate::UrlValidator;
use crate::extract::LinkExtractor;
use crate::fetch::Fetcher;

/// Counters collected while crawling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrawlStats {
    /// Pages that came back with status 200
    pub pages_fetched: usize,
    /// Pages that failed: bad status, network error, ...
    pub pages_failed: usize,
    /// New URLs added to the frontier
    pub links_discovered: usize,
    /// Number of batches run
    pub rounds: usize,
    /// Wall-clock time of the crawl, in seconds
    pub elapsed_secs: f64,
}

/// One crawl session. Owns all crawl state; nothing is global.
pub struct Crawler<F, E> {
    config: CrawlConfig,
    validator: UrlValidator,
    fetcher: F,
    extractor: E,
    queue: Mutex<CrawlQueue>,
    gate: Semaphore,
    stats: Mutex<CrawlStats>,
}

impl<F: Fetcher, E: LinkExtractor> Crawler<F, E> {
    pub fn new(config: CrawlConfig, fetcher: F, extractor: E) -> Self {
        Self {
            validator: UrlValidator::new(&config),
            queue: Mutex::new(CrawlQueue::new(config.seed_url())),
            gate: Semaphore::new(config.max_concurrent()),
            stats: Mutex::new(CrawlStats::default()),
            config,
            fetcher,
            extractor,
        }
    }

    /// Crawls until the frontier is empty (or a configured limit is hit)
    /// and returns every URL that was attempted.
    pub async fn crawl(&self) -> HashSet<String> {
        let start = Instant::now();

        tracing::info!(
            seed = %self.config.seed_url(),
            same_domain_only = self.config.same_domain_only(),
            max_concurrent = self.config.max_concurrent(),
            "Starting crawl"
        );

        match self.config.crawl_timeout() {
            Some(limit) => {
                if tokio::time::timeout(limit, self.run_rounds()).await.is_err() {
                    tracing::warn!("Crawl deadline of {:?} reached, stopping early", limit);
                }
            }
            None => self.run_rounds().await,
        }

        let duration = start.elapsed();
        self.record(|stats| stats.elapsed_secs = duration.as_secs_f64());

        let visited = self.queue().visited().clone();
        tracing::debug!("Crawl completed in {:.2} seconds", duration.as_secs_f64());
        tracing::debug!("Visited {} pages", visited.len());
        visited
    }

    /// Snapshot of the counters so far.
    pub fn stats(&self) -> CrawlStats {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn run_rounds(&self) {
        while let Some(batch) = self.next_batch() {
            let round = {
                let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
                stats.rounds += 1;
                stats.rounds
            };
            tracing::debug!(round, size = batch.len(), "Starting crawl round");

            let results = join_all(batch.iter().map(|url| self.process_page(url))).await;

            let found: usize = results.iter().map(Vec::len).sum();
            tracing::debug!(round, found, "Finished crawl round");
        }
    }

    // None means the crawl is done
    fn next_batch(&self) -> Option<Vec<String>> {
        let mut queue = self.queue();

        let mut size = self.config.max_concurrent();
        if let Some(max_pages) = self.config.max_pages() {
            let remaining = max_pages.saturating_sub(queue.visited().len());
            if remaining == 0 && queue.frontier_len() > 0 {
                tracing::info!(
                    max_pages,
                    left_in_queue = queue.frontier_len(),
                    "Page limit reached, stopping"
                );
            }
            size = size.min(remaining);
        }

        let batch = queue.take_batch(size);
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    // The per-URL worker. Always returns normally; errors become an empty list.
    async fn process_page(&self, url: &str) -> Vec<String> {
        if !self.queue().mark_visited(url) {
            tracing::debug!(url, "Already visited, skipping");
            return Vec::new();
        }

        match self.fetch_and_expand(url).await {
            Ok(links) => links,
            Err(e) => {
                self.record(|stats| stats.pages_failed += 1);
                tracing::error!(url, "Error processing {}: {:#}", url, e);
                Vec::new()
            }
        }
    }

    async fn fetch_and_expand(&self, url: &str) -> Result<Vec<String>> {
        // The permit only covers the network fetch; parsing happens after
        // it's released so another fetch can start.
        let body = {
            let _permit = self
                .gate
                .acquire()
                .await
                .context("Concurrency gate closed")?;

            tracing::debug!("Fetching: {}", url);
            let response = self.fetcher.get(url).await?;

            if !response.is_ok() {
                self.record(|stats| stats.pages_failed += 1);
                tracing::error!(
                    url,
                    status = response.status,
                    "Failed to fetch {}: Status {}",
                    url,
                    response.status
                );
                return Ok(Vec::new());
            }

            response.body
        };

        self.record(|stats| stats.pages_fetched += 1);

        let links = self.extractor.extract(&body, url);

        let discovered: Vec<String> = {
            let mut queue = self.queue();
            links
                .into_iter()
                .filter(|link| self.validator.is_valid(link) && queue.enqueue(link))
                .collect()
        };

        self.record(|stats| stats.links_discovered += discovered.len());
        tracing::debug!(url, new_links = discovered.len(), "Processed page");

        Ok(discovered)
    }

    fn queue(&self) -> MutexGuard<'_, CrawlQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, update: impl FnOnce(&mut CrawlStats)) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut *stats);
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why join_all and not tokio::spawn?
//    - join_all polls every future of a round on the current task
//    - Nothing needs to be 'static or Send, so futures can borrow &self
//    - It only resolves when the LAST future finishes, which is exactly
//      the round barrier we want
//
// 2. What does the Semaphore do here?
//    - It starts with max_concurrent permits
//    - acquire() waits until a permit is free
//    - The permit is returned when `_permit` goes out of scope, which is
//      right after the fetch, before we parse the HTML
//
// 3. Why a std Mutex in async code?
//    - The locked sections are tiny and never contain an .await
//    - A tokio Mutex is only needed when a lock must be held across .await
//
// 4. What is unwrap_or_else(PoisonError::into_inner)?
//    - A Mutex becomes "poisoned" if a thread panicked while holding it
//    - into_inner hands us the data anyway instead of panicking again
// -----------------------------------------------------------------------------
