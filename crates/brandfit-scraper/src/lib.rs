//! HTTP client for the creator-profile scraping service.
//!
//! Fetches creator profiles by username, normalizes the raw wire shape to
//! [`brandfit_core::CreatorProfile`], and degrades gracefully: transient
//! failures are retried with exponential backoff, per-username failures in
//! a batch are logged and skipped, and callers receive whatever subset was
//! actually retrievable.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

mod rate_limit;

pub use client::ProfileClient;
pub use error::ScraperError;
pub use normalize::normalize_profile;
pub use types::RawProfile;
