mod core;

pub use crate::core::feed::fetcher::FetchError;
pub use crate::core::feed::parser::PayloadError;
pub use crate::core::feed::types::{
    FeedConfig, FeedPost, DEFAULT_FEED_URL, DEFAULT_PROXY_ENDPOINT,
};
pub use crate::core::feed::{FeedIngestionService, FetchFailure};
