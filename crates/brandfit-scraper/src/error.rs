use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for profile {username}: {source}")]
    Deserialize {
        username: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited while fetching {username} (retry after {retry_after_secs}s)")]
    RateLimited {
        username: String,
        retry_after_secs: u64,
    },

    #[error("profile not found: {username}")]
    NotFound { username: String },

    #[error("unexpected HTTP status {status} while fetching {username}")]
    UnexpectedStatus { status: u16, username: String },
}
