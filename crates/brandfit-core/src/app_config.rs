use std::path::PathBuf;

use crate::creator::ValidationLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub brands_path: PathBuf,
    /// Base URL of the profile scraping service. Only required by commands
    /// that fetch over the network; offline input runs leave it unset.
    pub profile_api_url: Option<String>,
    pub profile_api_key: Option<String>,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub fetch_max_concurrent: usize,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_secs: u64,
    pub max_followers: i64,
    pub max_bio_len: usize,
}

impl AppConfig {
    /// The creator validation limits configured for this process.
    #[must_use]
    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_followers: self.max_followers,
            max_bio_len: self.max_bio_len,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("brands_path", &self.brands_path)
            .field("profile_api_url", &self.profile_api_url)
            .field(
                "profile_api_key",
                &self.profile_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .field("fetch_max_concurrent", &self.fetch_max_concurrent)
            .field("fetch_max_retries", &self.fetch_max_retries)
            .field("fetch_backoff_base_secs", &self.fetch_backoff_base_secs)
            .field("max_followers", &self.max_followers)
            .field("max_bio_len", &self.max_bio_len)
            .finish()
    }
}
