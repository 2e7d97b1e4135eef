use std::str::FromStr;

use anyhow::{Context, Result};

use crate::models::recommendation::RecommendationOptions;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only needed by the Postgres-backed stores.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub catalog_page_size: usize,
    pub default_limit: usize,
    pub default_min_confidence: u32,
    pub include_current_role: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 10,
            catalog_page_size: 100,
            default_limit: 10,
            default_min_confidence: 70,
            include_current_role: false,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            catalog_page_size: parse_or(&lookup, "CATALOG_PAGE_SIZE", defaults.catalog_page_size)?,
            default_limit: parse_or(&lookup, "RECOMMENDATION_LIMIT", defaults.default_limit)?,
            default_min_confidence: parse_or::<u32, _>(
                &lookup,
                "RECOMMENDATION_MIN_CONFIDENCE",
                defaults.default_min_confidence,
            )?
            .min(100),
            include_current_role: parse_or(
                &lookup,
                "RECOMMENDATION_INCLUDE_CURRENT_ROLE",
                defaults.include_current_role,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("Required environment variable 'DATABASE_URL' is not set")
    }

    pub fn recommendation_options(&self) -> RecommendationOptions {
        RecommendationOptions {
            limit: self.default_limit,
            include_current_role: self.include_current_role,
            min_confidence: self.default_min_confidence,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
