use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_JOB_DESCRIPTION_CHARS: usize = 20_000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Job descriptions longer than this are rejected before scoring.
    pub max_job_description_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_job_description_chars: DEFAULT_MAX_JOB_DESCRIPTION_CHARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_job_description_chars: parse_or(
                &lookup,
                "MAX_JOB_DESCRIPTION_CHARS",
                defaults.max_job_description_chars,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}
