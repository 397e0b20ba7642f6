pub mod error;
pub mod links;
pub mod normalize;
pub mod state;
pub mod config;
pub mod scrape;
pub mod runner;


pub use error::{CrawlError, FetchError, ParseError};
pub use links::{Link, extract_links};
pub use normalize::{Origin, normalize};
pub use state::{CrawlOutcome, CrawlerState};
pub use config::{CrawlerConfig, CrawlerConfigRef, DEFAULT_MAX_DEPTH, FetchErrorPolicy};
pub use scrape::{build_client, fetch_page, scrape_page};
pub use runner::crawl;
