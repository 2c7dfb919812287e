use crate::app_config::AppConfig;
use crate::pricing::DEFAULT_MARKUP;
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let bind_addr = parse_addr("NAZDONE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NAZDONE_LOG_LEVEL", "info");

    let price_markup = parse_u64("NAZDONE_PRICE_MARKUP", &DEFAULT_MARKUP.to_string())?;

    let fetch_timeout_secs = parse_u64("NAZDONE_FETCH_TIMEOUT_SECS", "60")?;
    let fetch_user_agent = or_default("NAZDONE_FETCH_USER_AGENT", DEFAULT_USER_AGENT);
    let fetch_max_retries = parse_u32("NAZDONE_FETCH_MAX_RETRIES", "2")?;
    let fetch_backoff_base_secs = parse_u64("NAZDONE_FETCH_BACKOFF_BASE_SECS", "1")?;
    let fetch_max_concurrency = parse_usize("NAZDONE_FETCH_MAX_CONCURRENCY", "1")?;
    if fetch_max_concurrency == 0 {
        return Err(invalid(
            "NAZDONE_FETCH_MAX_CONCURRENCY",
            "must be at least 1".to_string(),
        ));
    }
    let max_urls_per_request = parse_usize("NAZDONE_MAX_URLS_PER_REQUEST", "20")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        price_markup,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_retries,
        fetch_backoff_base_secs,
        fetch_max_concurrency,
        max_urls_per_request,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
