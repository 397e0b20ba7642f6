use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::crawler::{DEFAULT_MAX_DEPTH, FetchErrorPolicy};
use crate::sitemap::DEFAULT_OUTPUT_FILE;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
/// Program arguments. `CrawlerConfig` describes only the crawler.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Crawl a website and write its same-site pages as a sitemap", long_about = None)]
pub struct Config {
    /// Seed URL; its scheme and host bound the crawl
    #[arg(short, long, default_value = "https://adrianpetrov.com")]
    pub url: String,
    /// Number of link hops to follow from the seed page
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,
    /// Sitemap file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Maximum pages fetched at once within one level
    #[arg(long, default_value = "1")]
    pub thread_count: usize,
    /// Per-request timeout in seconds (none by default)
    #[arg(long)]
    pub request_timeout: Option<u64>,
    /// What to do when a page can't be fetched or parsed
    #[arg(long, default_value = "abort", value_enum)]
    pub on_fetch_error: FetchErrorPolicy,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let seed = Url::parse(&self.url)
            .map_err(|e| anyhow::anyhow!("invalid seed url '{}': {}", self.url, e))?;
        if !matches!(seed.scheme(), "http" | "https") {
            anyhow::bail!("seed url must use http or https, got '{}'", seed.scheme());
        }
        if seed.host_str().is_none() {
            anyhow::bail!("seed url has no host: {}", self.url);
        }
        if self.thread_count == 0 {
            anyhow::bail!("thread_count must be greater than 0");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
