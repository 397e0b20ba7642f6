use reqwest::StatusCode;
use thiserror::Error;

/// Markup could not be turned into a document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("markup looks binary: NUL byte at offset {offset}")]
    Binary { offset: usize },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// Anything that stops a page from contributing links to the crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
    #[error("crawl worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
