use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::config::AppConfig;

/// Settings for one search provider endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn new(name: &str, base_url: &str, user_agent: &str, timeout_seconds: u64) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.trim_end_matches('?').to_string(),
            user_agent: user_agent.to_string(),
            timeout_seconds,
        }
    }

    /// JustWatch-style aggregation endpoint as configured for the app
    pub fn justwatch(config: &AppConfig) -> Self {
        Self::new(
            "JustWatch",
            &config.base_url,
            &config.user_agent,
            config.timeout_seconds,
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// `<base>?q=<url-encoded query>`
    pub fn search_url(&self, query: &str) -> String {
        let separator = if self.base_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{}q={}",
            self.base_url,
            separator,
            urlencoding::encode(query)
        )
    }
}
