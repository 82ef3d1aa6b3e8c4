// src/crawl/queue.rs
// =============================================================================
// The crawl's bookkeeping: which URLs are waiting, and which we've tried.
//
// - frontier: URLs waiting to be fetched, first in first out (BFS order)
// - visited:  URLs whose fetch has been attempted, successful or not
// - enqueued: every URL that has ever entered the frontier, so the same
//             link found on two pages is only queued once. The seed is
//             stored both as typed and in normalized form, so a link back
//             to "/" doesn't queue the home page a second time.
//
// visited is the authoritative gate: mark_visited() is an atomic
// "insert if absent", and a URL is fetched only when it returns true.
// Nothing is ever removed from visited.
//
// Rust concepts:
// - VecDeque: Double-ended queue, push_back + drain from the front = FIFO
// - HashSet: O(1) membership checks
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

#[derive(Debug)]
pub(crate) struct CrawlQueue {
    frontier: VecDeque<String>,
    visited: HashSet<String>,
    enqueued: HashSet<String>,
}

impl CrawlQueue {
    pub(crate) fn new(seed_url: &str) -> Self {
        let mut enqueued = HashSet::from([seed_url.to_string()]);
        if let Some(normalized) = normalize(seed_url) {
            enqueued.insert(normalized);
        }

        Self {
            frontier: VecDeque::from([seed_url.to_string()]),
            visited: HashSet::new(),
            enqueued,
        }
    }

    /// Adds a URL to the back of the frontier.
    ///
    /// Returns false (and does nothing) if the URL was already visited or
    /// has already been queued.
    pub(crate) fn enqueue(&mut self, url: &str) -> bool {
        if self.visited.contains(url) || !self.enqueued.insert(url.to_string()) {
            return false;
        }
        self.frontier.push_back(url.to_string());
        true
    }

    /// Removes up to `max` URLs from the front of the frontier.
    pub(crate) fn take_batch(&mut self, max: usize) -> Vec<String> {
        let size = max.min(self.frontier.len());
        self.frontier.drain(..size).collect()
    }

    /// Records a fetch attempt. Returns true only the first time for a URL.
    pub(crate) fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub(crate) fn visited(&self) -> &HashSet<String> {
        &self.visited
    }
}

// Same form the link extractor produces: parsed, fragment removed
fn normalize(url: &str) -> Option<String> {
    let mut url = Url::parse(url).ok()?;
    url.set_fragment(None);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_seed() {
        let mut queue = CrawlQueue::new("https://example.com");
        assert_eq!(queue.frontier_len(), 1);
        assert!(queue.visited().is_empty());
        assert_eq!(queue.take_batch(5), vec!["https://example.com"]);
        assert_eq!(queue.frontier_len(), 0);
    }

    #[test]
    fn test_fifo_batches() {
        let mut queue = CrawlQueue::new("https://example.com");
        queue.take_batch(1);
        for page in ["a", "b", "c"] {
            assert!(queue.enqueue(&format!("https://example.com/{}", page)));
        }
        assert_eq!(
            queue.take_batch(2),
            vec!["https://example.com/a", "https://example.com/b"]
        );
        assert_eq!(queue.take_batch(2), vec!["https://example.com/c"]);
        assert!(queue.take_batch(2).is_empty());
    }

    #[test]
    fn test_url_is_only_queued_once() {
        let mut queue = CrawlQueue::new("https://example.com");
        assert!(!queue.enqueue("https://example.com"));
        assert!(queue.enqueue("https://example.com/a"));
        assert!(!queue.enqueue("https://example.com/a"));
        assert_eq!(queue.frontier_len(), 2);
    }

    #[test]
    fn test_normalized_seed_is_not_queued_again() {
        let mut queue = CrawlQueue::new("https://example.com");
        assert!(!queue.enqueue("https://example.com/"));
        assert_eq!(queue.frontier_len(), 1);
        assert_eq!(queue.take_batch(5), vec!["https://example.com"]);
    }

    #[test]
    fn test_seed_with_fragment_blocks_plain_form() {
        let mut queue = CrawlQueue::new("https://example.com/docs#intro");
        assert!(!queue.enqueue("https://example.com/docs"));
    }

    #[test]
    fn test_unparseable_seed_is_still_queued() {
        let mut queue = CrawlQueue::new("not a url");
        assert_eq!(queue.take_batch(1), vec!["not a url"]);
    }

    #[test]
    fn test_visited_url_is_not_queued() {
        let mut queue = CrawlQueue::new("https://example.com");
        queue.take_batch(1);
        assert!(queue.mark_visited("https://example.com"));
        assert!(!queue.enqueue("https://example.com"));
        assert_eq!(queue.frontier_len(), 0);
    }

    #[test]
    fn test_mark_visited_is_insert_if_absent() {
        let mut queue = CrawlQueue::new("https://example.com");
        assert!(queue.mark_visited("https://example.com"));
        assert!(!queue.mark_visited("https://example.com"));
        assert_eq!(queue.visited().len(), 1);
    }
}
