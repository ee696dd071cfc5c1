use anyhow::{Context, Result};

use crate::matching::scorer::ScorerConfig;
use crate::matching::visualize::MAX_BAR_LENGTH;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scorer: ScorerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScorerConfig::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scorer: ScorerConfig {
                strict_mode: optional_env("MATCH_STRICT_MODE", defaults.strict_mode)?,
                apply_underqualified_penalty: optional_env(
                    "MATCH_UNDERQUALIFIED_PENALTY",
                    defaults.apply_underqualified_penalty,
                )?,
                raw_text_experience_years: non_negative(
                    "MATCH_RAW_TEXT_EXPERIENCE_YEARS",
                    optional_env(
                        "MATCH_RAW_TEXT_EXPERIENCE_YEARS",
                        defaults.raw_text_experience_years,
                    )?,
                )?,
                bar_length: bounded_bar_length(optional_env(
                    "MATCH_BAR_LENGTH",
                    defaults.bar_length,
                )?)?,
            },
        })
    }
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

fn non_negative(key: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("Environment variable '{key}' must be a non-negative number");
    }
    Ok(value)
}

fn bounded_bar_length(length: usize) -> Result<usize> {
    if length > MAX_BAR_LENGTH {
        anyhow::bail!("MATCH_BAR_LENGTH must be at most {MAX_BAR_LENGTH}, got {length}");
    }
    Ok(length)
}
