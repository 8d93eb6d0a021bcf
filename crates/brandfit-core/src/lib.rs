//! Shared domain types and configuration for brandfit.
//!
//! Holds the creator and brand profile records, the audience-tier
//! classifier, creator validation, the brand roster loader, and the
//! environment-driven application configuration. The scoring engine in
//! `brandfit-scoring` builds entirely on these types.

pub mod app_config;
pub mod brand;
pub mod config;
pub mod creator;
pub mod tier;

pub use app_config::{AppConfig, Environment};
pub use brand::{load_brands, BrandProfile, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use creator::{CreatorProfile, ValidationLimits};
pub use tier::{classify_tier, Tier};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("brand must have at least one of name or category")]
    UnidentifiedBrand,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("invalid brands configuration: {0}")]
    Validation(String),
}
