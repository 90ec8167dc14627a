/// Test helper functions and service builders
use reelscout_lib::modules::provider::{
    infrastructure::cache::SearchCache, SearchPipeline, SearchProvider,
};
use std::sync::Arc;
use std::time::Duration;

/// Pipeline over any provider with a 5 minute cache
pub fn build_pipeline(provider: Arc<dyn SearchProvider>) -> SearchPipeline {
    SearchPipeline::new(provider, SearchCache::new(Duration::from_secs(300), 100))
}
