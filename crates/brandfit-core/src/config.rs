use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("BRANDFIT_ENV", "development"));
    let log_level = or_default("BRANDFIT_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("BRANDFIT_BRANDS_PATH", "./config/brands.yaml"));

    let profile_api_url = lookup("BRANDFIT_PROFILE_API_URL").ok();
    let profile_api_key = lookup("BRANDFIT_PROFILE_API_KEY").ok();

    let fetch_timeout_secs = parse_u64("BRANDFIT_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default(
        "BRANDFIT_FETCH_USER_AGENT",
        "brandfit/0.1 (creator-intelligence)",
    );
    let fetch_max_concurrent = parse_usize("BRANDFIT_FETCH_MAX_CONCURRENT", "4")?;
    let fetch_max_retries = parse_u32("BRANDFIT_FETCH_MAX_RETRIES", "3")?;
    let fetch_backoff_base_secs = parse_u64("BRANDFIT_FETCH_BACKOFF_BASE_SECS", "2")?;

    let max_followers = parse_i64("BRANDFIT_MAX_FOLLOWERS", "10000000000")?;
    let max_bio_len = parse_usize("BRANDFIT_MAX_BIO_LEN", "1000")?;

    Ok(AppConfig {
        env,
        log_level,
        brands_path,
        profile_api_url,
        profile_api_key,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_concurrent,
        fetch_max_retries,
        fetch_backoff_base_secs,
        max_followers,
        max_bio_len,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
