use serde::{Deserialize, Serialize};

pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_FEED_URL: &str = "https://medium.com/feed/@joaoac";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedPost {
    pub title: String,
    pub date: String,
    pub preview: String,
    pub link: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub proxy_endpoint: String,
    pub feed_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            proxy_endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

impl FeedConfig {
    pub fn new(proxy_endpoint: impl Into<String>, feed_url: impl Into<String>) -> Self {
        Self {
            proxy_endpoint: proxy_endpoint.into(),
            feed_url: feed_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let proxy_endpoint = std::env::var("FOLIO_PROXY_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROXY_ENDPOINT.to_string());
        let feed_url = std::env::var("FOLIO_FEED_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        Self {
            proxy_endpoint,
            feed_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProxyEntry {
    pub title: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub description: String,
    pub link: String,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_conversion_proxy() {
        let config = FeedConfig::default();
        assert_eq!(config.proxy_endpoint, DEFAULT_PROXY_ENDPOINT);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn explicit_config_overrides_both_urls() {
        let config = FeedConfig::new("http://127.0.0.1:9/api.json", "https://example.com/feed");
        assert_eq!(config.proxy_endpoint, "http://127.0.0.1:9/api.json");
        assert_eq!(config.feed_url, "https://example.com/feed");
    }
}
