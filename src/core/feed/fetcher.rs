use super::types::FeedConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

pub async fn fetch_proxy_payload(
    client: &reqwest::Client,
    config: &FeedConfig,
) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(&config.proxy_endpoint)
        .query(&[("rss_url", config.feed_url.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    Ok(response.bytes().await?.to_vec())
}
