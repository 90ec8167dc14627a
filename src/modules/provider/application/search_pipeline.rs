use std::sync::Arc;

use crate::{
    modules::{
        movie::{
            domain::services::{response_unwrapper, RecordNormalizer},
            MovieRecord, StreamingOffer,
        },
        provider::{
            domain::{entities::ProviderConfig, repositories::SearchProvider},
            infrastructure::{
                adapters::JustWatchAdapter,
                cache::{CacheStats, SearchCache},
            },
        },
    },
    shared::{
        config::AppConfig,
        errors::AppResult,
        utils::{
            logger::{LogContext, TimedOperation},
            validation::Validator,
        },
    },
};

/// Query -> provider call -> unwrap -> normalize, memoized per query text
pub struct SearchPipeline {
    provider: Arc<dyn SearchProvider>,
    normalizer: RecordNormalizer,
    cache: SearchCache,
}

impl SearchPipeline {
    pub fn new(provider: Arc<dyn SearchProvider>, cache: SearchCache) -> Self {
        Self {
            provider,
            normalizer: RecordNormalizer::for_search(),
            cache,
        }
    }

    /// JustWatch adapter plus cache, both sized from `config`
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let adapter = JustWatchAdapter::new(ProviderConfig::justwatch(config))?;
        let cache = SearchCache::new(config.cache_ttl(), config.cache_max_entries);
        Ok(Self::new(Arc::new(adapter), cache))
    }

    /// Blank queries fail validation before any network call is made.
    /// Transport failures are returned as-is and never cached.
    pub async fn search(&self, query: &str) -> AppResult<Vec<MovieRecord>> {
        let query = Validator::validate_search_query(query)?;

        if let Some(cached) = self.cache.get(query) {
            LogContext::search_operation(query, Some("cache"), Some(cached.len()));
            return Ok(cached);
        }

        let timer = TimedOperation::new(&format!("search '{}'", query));
        let raw = match self.provider.search_raw(query).await {
            Ok(raw) => raw,
            Err(e) => {
                LogContext::error_with_context(&e, &format!("search '{}'", query));
                return Err(e);
            }
        };

        let records = self.normalizer.normalize_all(&response_unwrapper::unwrap(&raw));
        timer.finish_with_info(&format!("{} results", records.len()));
        LogContext::search_operation(query, Some(self.provider.name()), Some(records.len()));

        self.cache.insert(query, records.clone());
        Ok(records)
    }

    /// Streaming offers for a title, taken from the first search result
    pub async fn fetch_offers(&self, title: &str) -> AppResult<Vec<StreamingOffer>> {
        let records = self.search(title).await?;
        Ok(records
            .into_iter()
            .next()
            .map(|record| record.streaming_offers)
            .unwrap_or_default())
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
