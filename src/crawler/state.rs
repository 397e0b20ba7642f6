use std::collections::{BTreeSet, HashSet, VecDeque};

/// Current state of the crawler. Owned by the crawl loop alone.
pub struct CrawlerState {
    /// Every URL ever claimed for fetching. Never shrinks.
    pub visited_urls: HashSet<String>,
    /// URLs waiting at the current level
    pub frontier: VecDeque<String>,
    /// URLs discovered for the following level, duplicates included
    pub next_frontier: VecDeque<String>,
    /// Claimed URLs whose page could not be fetched or parsed
    pub unreachable: Vec<String>,
}

/// Result of a finished crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub visited: BTreeSet<String>,
    pub unreachable: Vec<String>,
}

impl CrawlerState {
    pub fn new(seed_links: Vec<String>) -> Self {
        Self {
            visited_urls: HashSet::new(),
            frontier: seed_links.into(),
            next_frontier: VecDeque::new(),
            unreachable: Vec::new(),
        }
    }

    /// Drains the current frontier in FIFO order and marks every URL not seen
    /// before as visited. Returns the newly claimed URLs in that order.
    pub fn claim_level(&mut self) -> Vec<String> {
        let mut claimed = Vec::new();
        while let Some(url) = self.frontier.pop_front() {
            if self.visited_urls.insert(url.clone()) {
                claimed.push(url);
            }
        }
        claimed
    }

    pub fn enqueue(&mut self, found: Vec<String>) {
        self.next_frontier.extend(found);
    }

    pub fn mark_unreachable(&mut self, url: String) {
        self.unreachable.push(url);
    }

    /// Moves to the next level. Leftovers of the current frontier are dropped.
    pub fn advance(&mut self) {
        self.frontier = std::mem::take(&mut self.next_frontier);
    }

    pub fn into_outcome(self) -> CrawlOutcome {
        CrawlOutcome {
            visited: self.visited_urls.into_iter().collect(),
            unreachable: self.unreachable,
        }
    }
}

impl CrawlOutcome {
    /// Visited URLs whose page was fetched successfully, in lexicographic order
    pub fn sitemap_urls(&self) -> BTreeSet<String> {
        let unreachable: HashSet<&String> = self.unreachable.iter().collect();
        self.visited
            .iter()
            .filter(|url| !unreachable.contains(url))
            .cloned()
            .collect()
    }
}
