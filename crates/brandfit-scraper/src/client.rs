//! HTTP client for the profile scraping service.

use std::time::Duration;

use brandfit_core::CreatorProfile;
use futures::stream::{self, StreamExt};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};

use crate::error::ScraperError;
use crate::normalize::normalize_profile;
use crate::rate_limit::retry_with_backoff;
use crate::types::RawProfile;

/// Characters escaped when a username is embedded as a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Fallback `Retry-After` when a 429 response does not carry the header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 30;

/// Client for `GET {base}/v1/profiles/{username}`.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx
/// responses as typed errors. Transient errors (429, network failures)
/// are automatically retried with exponential backoff up to `max_retries`
/// additional attempts.
pub struct ProfileClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl ProfileClient {
    /// Creates a `ProfileClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors; set to `0` to disable retries.
    /// `backoff_base_secs` controls the base delay for exponential
    /// backoff: the wait before the n-th retry is
    /// `backoff_base_secs * 2^(n-1)` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_owned),
            max_retries,
            backoff_base_secs,
        })
    }

    fn profile_url(&self, username: &str) -> String {
        let encoded = utf8_percent_encode(username, PATH_SEGMENT);
        format!("{}/v1/profiles/{encoded}", self.base_url)
    }

    /// Fetches and normalizes one creator profile, retrying transient
    /// errors.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScraperError::NotFound`] — HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network failure after all retries exhausted.
    /// - [`ScraperError::Deserialize`] — response body is not a valid profile.
    pub async fn fetch_profile(&self, username: &str) -> Result<CreatorProfile, ScraperError> {
        let url = self.profile_url(username);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            let username = username.to_owned();
            async move {
                let mut request = self.client.get(&url);
                if let Some(key) = self.api_key.as_deref() {
                    request = request.bearer_auth(key);
                }

                let response = request.send().await?;
                let status = response.status();

                if status == StatusCode::NOT_FOUND {
                    return Err(ScraperError::NotFound { username });
                }
                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                    return Err(ScraperError::RateLimited {
                        username,
                        retry_after_secs,
                    });
                }
                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        username,
                    });
                }

                let body = response.text().await?;
                let raw: RawProfile = serde_json::from_str(&body)
                    .map_err(|source| ScraperError::Deserialize { username, source })?;
                Ok(normalize_profile(raw))
            }
        })
        .await
    }

    /// Fetches a batch of profiles with bounded concurrency, preserving
    /// input order.
    ///
    /// Per-username failures are logged and skipped rather than
    /// propagated: a single unreachable profile must not abort the run.
    /// The result may therefore be any subset of the request, including
    /// empty — the caller decides whether that is fatal.
    pub async fn fetch_profiles(
        &self,
        usernames: &[String],
        max_concurrent: usize,
    ) -> Vec<CreatorProfile> {
        let fetched: Vec<Option<CreatorProfile>> = stream::iter(usernames)
            .map(|username| async move {
                match self.fetch_profile(username).await {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        tracing::warn!(
                            creator = %username,
                            error = %e,
                            "profile fetch failed; skipping creator"
                        );
                        None
                    }
                }
            })
            .buffered(max_concurrent.max(1))
            .collect()
            .await;

        fetched.into_iter().flatten().collect()
    }
}
