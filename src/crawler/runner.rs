use std::collections::VecDeque;
use std::sync::Arc;
use log2::{debug, error, info, warn};
use tokio::task::JoinHandle;

use super::config::{CrawlerConfigRef, FetchErrorPolicy};
use super::error::CrawlError;
use super::scrape::{build_client, scrape_page};
use super::state::{CrawlOutcome, CrawlerState};

type PageTask = JoinHandle<Result<Vec<String>, CrawlError>>;

/// Breadth-first crawl from the configured seed, `max_depth` levels deep.
///
/// The seed page is always fetched to build the first frontier but is not itself
/// part of the visited set. Each level claims its unseen URLs up front, so a URL
/// is fetched at most once no matter how many fetches run side by side.
pub async fn crawl(crawler_cfg_ref: CrawlerConfigRef) -> Result<CrawlOutcome, CrawlError> {
    let client = build_client(&crawler_cfg_ref)?;
    let seed = crawler_cfg_ref.starting_url.as_str();

    info!("Crawling {} (origin {}) to depth {}", seed, crawler_cfg_ref.origin, crawler_cfg_ref.max_depth);
    let seed_links = scrape_page(&client, seed, &crawler_cfg_ref.origin).await?;
    let mut state = CrawlerState::new(seed_links);

    for level in 1..=crawler_cfg_ref.max_depth {
        let queued = state.frontier.len();
        let claimed = state.claim_level();
        info!("Level {}: {} new page(s) out of {} queued", level, claimed.len(), queued);

        for batch in claimed.chunks(crawler_cfg_ref.thread_count.max(1)) {
            let mut pending: VecDeque<(String, PageTask)> = batch
                .iter()
                .map(|url| {
                    let client = client.clone();
                    let config = Arc::clone(&crawler_cfg_ref);
                    let task_url = url.clone();
                    let handle = tokio::spawn(async move { scrape_page(&client, &task_url, &config.origin).await });
                    (url.clone(), handle)
                })
                .collect();

            while let Some((url, handle)) = pending.pop_front() {
                match handle.await? {
                    Ok(found) => state.enqueue(found),
                    Err(e) => match crawler_cfg_ref.on_fetch_error {
                        FetchErrorPolicy::Abort => {
                            error!("Aborting crawl at level {}: {}", level, e);
                            for (_, rest) in pending {
                                rest.abort();
                            }
                            return Err(e);
                        }
                        FetchErrorPolicy::Skip => {
                            warn!("Skipping {}: {}", url, e);
                            state.mark_unreachable(url);
                        }
                    },
                }
            }
        }

        state.advance();
    }

    debug!("Discarding {} url(s) beyond depth {}", state.frontier.len(), crawler_cfg_ref.max_depth);
    let outcome = state.into_outcome();
    info!("Crawl finished: {} visited, {} unreachable", outcome.visited.len(), outcome.unreachable.len());

    Ok(outcome)
}
