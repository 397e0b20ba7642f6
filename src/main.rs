use log2::*;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use sitemapper::{config, crawler, sitemap};

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true)
        .module_with_line(true)
        .module_filter(|module| module.starts_with("sitemapper"))
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    let crawler_config = Arc::new(
        crawler::CrawlerConfig::from_seed(&cfg.url)?
            .with_max_depth(cfg.depth)
            .with_thread_count(cfg.thread_count)
            .with_request_timeout(cfg.request_timeout)
            .with_fetch_error_policy(cfg.on_fetch_error),
    );

    match crawler::crawl(crawler_config).await {
        Ok(outcome) => {
            let urls = outcome.sitemap_urls();
            sitemap::write_sitemap(&cfg.output, &urls)?;
            info!("Done in {:?}: {} url(s) in {}", START_TIME.elapsed(), urls.len(), cfg.output.display());
            Ok(())
        }
        Err(e) => {
            // nothing is written when the crawl fails
            error!("Crawling failed: {}", e);
            Err(e.into())
        }
    }
}
