use async_trait::async_trait;
use serde_json::Value;

use crate::{
    modules::provider::{
        domain::{entities::ProviderConfig, repositories::SearchProvider},
        infrastructure::http_client::JsonHttpClient,
    },
    shared::errors::AppResult,
};

/// JustWatch/IMDb aggregation endpoint (`<base>?q=<query>`)
pub struct JustWatchAdapter {
    http_client: JsonHttpClient,
    config: ProviderConfig,
}

impl JustWatchAdapter {
    pub fn new(config: ProviderConfig) -> AppResult<Self> {
        let http_client = JsonHttpClient::new(&config.name, &config.user_agent, config.timeout())?;
        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn build_search_url(&self, query: &str) -> String {
        self.config.search_url(query)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl SearchProvider for JustWatchAdapter {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn search_raw(&self, query: &str) -> AppResult<Value> {
        let url = self.build_search_url(query);
        log::info!("{}: Searching for '{}'", self.config.name, query);
        self.http_client.get_json(&url).await
    }
}
