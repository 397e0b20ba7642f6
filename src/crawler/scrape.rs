use log2::{debug, info};
use reqwest::Client;
use std::time::Duration;

use super::config::CrawlerConfig;
use super::error::{CrawlError, FetchError};
use super::links::extract_links;
use super::normalize::{Origin, normalize};

/// HTTP client shared by every fetch of one crawl
pub fn build_client(config: &CrawlerConfig) -> Result<Client, FetchError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout_sec {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    builder.build().map_err(FetchError::Client)
}

/// GET `url` and return the response body. Non-2xx statuses are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let transport = |source| FetchError::Transport { url: url.to_string(), source };

    let response = client.get(url).send().await.map_err(transport)?;
    if !response.status().is_success() {
        return Err(FetchError::Status { url: url.to_string(), status: response.status() });
    }

    let body = response.bytes().await.map_err(transport)?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Fetch `url` and return the same-site links on it, normalized against `origin`.
pub async fn scrape_page(client: &Client, url: &str, origin: &Origin) -> Result<Vec<String>, CrawlError> {
    let body = fetch_page(client, url).await?;
    let links = extract_links(&body).map_err(|source| CrawlError::Parse { url: url.to_string(), source })?;
    let found = normalize(origin, &links);

    info!("Found {} same-site urls out of {} links on page {}", found.len(), links.len(), url);

    Ok(found)
}
