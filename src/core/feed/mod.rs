pub mod fetcher;
pub mod parser;
pub mod transform;
pub mod types;

use fetcher::{fetch_proxy_payload, FetchError};
use parser::{parse_proxy_payload, PayloadError};
use transform::post_from_entry;
use types::{FeedConfig, FeedPost};

#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error(transparent)]
    Http(#[from] FetchError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

#[derive(Debug, Clone)]
pub struct FeedIngestionService {
    client: reqwest::Client,
    config: FeedConfig,
}

impl Default for FeedIngestionService {
    fn default() -> Self {
        Self::new(FeedConfig::default())
    }
}

impl FeedIngestionService {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn with_client(client: reqwest::Client, config: FeedConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub async fn try_fetch_recent_posts(&self) -> Result<Vec<FeedPost>, FetchFailure> {
        let payload = fetch_proxy_payload(&self.client, &self.config).await?;
        let entries = parse_proxy_payload(&payload)?;
        Ok(entries.iter().map(post_from_entry).collect())
    }

    pub async fn fetch_recent_posts(&self) -> Vec<FeedPost> {
        match self.try_fetch_recent_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "fetched recent posts");
                posts
            }
            Err(error) => {
                tracing::warn!(%error, "failed to fetch recent posts");
                Vec::new()
            }
        }
    }
}
