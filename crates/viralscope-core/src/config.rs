use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false/1/0, got \"{other}\""),
            }),
        }
    };

    let output_dir = PathBuf::from(or_default("VIRALSCOPE_OUTPUT_DIR", "viral_data"));
    let max_captures = parse_usize("VIRALSCOPE_MAX_CAPTURES", "15")?;
    let top_n = parse_usize("VIRALSCOPE_TOP_N", "10")?;
    let enrich_delay_ms = parse_u64("VIRALSCOPE_ENRICH_DELAY_MS", "1000")?;

    let scraper_enabled = parse_bool("VIRALSCOPE_SCRAPER_ENABLED", "true")?;
    let scraper_timeout_secs = parse_u64("VIRALSCOPE_SCRAPER_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default(
        "VIRALSCOPE_SCRAPER_USER_AGENT",
        "viralscope/0.1 (viral-content-analysis)",
    );
    let scraper_base_url = or_default("VIRALSCOPE_SCRAPER_BASE_URL", "https://www.instagram.com");

    let log_level = or_default("VIRALSCOPE_LOG_LEVEL", "info");
    let scoring_path = lookup("VIRALSCOPE_SCORING_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        output_dir,
        max_captures,
        top_n,
        enrich_delay_ms,
        scraper_enabled,
        scraper_timeout_secs,
        scraper_user_agent,
        scraper_base_url,
        log_level,
        scoring_path,
    })
}
