//! Retry utilities for the profile client.
//!
//! Transient errors (429, network failures) are retried with exponential
//! backoff; everything else propagates immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Returns `true` if `err` represents a transient condition worth
/// retrying after a backoff delay.
///
/// Retriable: [`ScraperError::RateLimited`] (the service asked us to back
/// off) and [`ScraperError::Http`] (connection reset, timeout, etc.).
/// Everything else — 404s, unexpected statuses, parse failures — would
/// return the same result on a retry.
fn is_retriable(err: &ScraperError) -> bool {
    matches!(
        err,
        ScraperError::RateLimited { .. } | ScraperError::Http(_)
    )
}

/// Executes `operation` with exponential backoff retries on transient
/// errors.
///
/// The wait before the n-th retry is `backoff_base_secs * 2^(n-1)`
/// seconds, up to `max_retries` additional attempts after the first try.
/// If all retries are exhausted the last error is returned.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if is_retriable(&err) && attempt < max_retries => {
                let delay_secs = backoff_base_secs.saturating_mul(1_u64 << attempt.min(16));
                tracing::warn!(
                    error = %err,
                    attempt = attempt + 1,
                    max_retries,
                    delay_secs,
                    "transient fetch error, backing off"
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
