use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use super::normalize::Origin;

/// Default number of BFS levels expanded from the seed
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// What the crawler does when a page can't be fetched or parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FetchErrorPolicy {
    /// Stop the whole crawl on the first failure
    #[default]
    Abort,
    /// Log the failure, remember the URL as unreachable and keep going
    Skip,
}

/// Configuration for the crawler
pub struct CrawlerConfig {
    pub starting_url: Url,
    pub origin: Origin,
    pub max_depth: usize,
    pub thread_count: usize,
    pub request_timeout_sec: Option<u64>,
    pub on_fetch_error: FetchErrorPolicy,
}

impl CrawlerConfig {
    pub fn new(starting_url: Url) -> Self {
        let origin = Origin::from_seed(starting_url.as_str());
        Self {
            starting_url,
            origin,
            max_depth: DEFAULT_MAX_DEPTH,
            thread_count: 1,
            request_timeout_sec: None,
            on_fetch_error: FetchErrorPolicy::Abort,
        }
    }

    /// Parses `seed` for fetching but takes the origin from the string exactly
    /// as given, so hrefs are compared against what the user typed rather than
    /// the normalized form (lowercased host, default port dropped).
    pub fn from_seed(seed: &str) -> Result<Self, url::ParseError> {
        let starting_url = Url::parse(seed)?;
        Ok(Self { origin: Origin::from_seed(seed), ..Self::new(starting_url) })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Upper bound on fetches running at once inside one level. Zero is treated as one.
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: Option<u64>) -> Self {
        self.request_timeout_sec = timeout_sec;
        self
    }

    pub fn with_fetch_error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.on_fetch_error = policy;
        self
    }
}

pub type CrawlerConfigRef = Arc<CrawlerConfig>;
