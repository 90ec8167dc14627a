use async_trait::async_trait;
use serde_json::Value;

use crate::shared::errors::AppResult;

/// Port for the external movie-search endpoint.
///
/// Implementations return the response body untouched; locating the result
/// list and normalizing items is the pipeline's job since the provider does
/// not commit to a response shape.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Human readable provider name, used in logs and error messages
    fn name(&self) -> &str;

    /// One search call for `query` (already validated and trimmed)
    async fn search_raw(&self, query: &str) -> AppResult<Value>;
}
