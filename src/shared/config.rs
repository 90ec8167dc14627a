use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://imdb.iamidiotareyoutoo.com/justwatch";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; reelscout/0.1)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 500;

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl AppConfig {
    /// Load configuration from `REELSCOUT_*` variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("REELSCOUT_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let user_agent = lookup("REELSCOUT_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let timeout_seconds = parse_var(&lookup, "REELSCOUT_TIMEOUT_SECS")?
            .unwrap_or(defaults.timeout_seconds);
        let cache_ttl_seconds = parse_var(&lookup, "REELSCOUT_CACHE_TTL_SECS")?
            .unwrap_or(defaults.cache_ttl_seconds);
        let cache_max_entries = parse_var::<_, usize>(&lookup, "REELSCOUT_CACHE_MAX_ENTRIES")?
            .unwrap_or(defaults.cache_max_entries);

        if timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "REELSCOUT_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            user_agent,
            timeout_seconds,
            cache_ttl_seconds,
            cache_max_entries,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| {
                AppError::ConfigError(format!("{} is not a valid number: '{}'", key, raw))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(8));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("REELSCOUT_BASE_URL", "http://localhost:9000/search"),
            ("REELSCOUT_TIMEOUT_SECS", "3"),
            ("REELSCOUT_CACHE_TTL_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/search");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.cache_ttl_seconds, 0);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("REELSCOUT_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("REELSCOUT_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
