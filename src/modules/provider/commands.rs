use serde::{Deserialize, Serialize};

use crate::modules::{
    movie::{MovieRecord, StreamingOffer},
    provider::SearchPipeline,
    session::{AppState, Page, SearchFilters, SearchNotice},
};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMoviesRequest {
    pub query: String,
    pub filters: SearchFilters,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchMoviesResponse {
    pub notice: SearchNotice,
    pub results: Vec<MovieRecord>,
}

/// Run one search and apply it to the session. Failures come back inside the
/// notice rather than as an error, so the caller always has something to show.
pub async fn search_movies(
    request: SearchMoviesRequest,
    pipeline: &SearchPipeline,
    state: &mut AppState,
) -> SearchMoviesResponse {
    if state.page() != Page::Search {
        if let Err(e) = state.navigate(Page::Search) {
            log::warn!("{}", e);
        }
    }
    state.set_filters(request.filters);

    let result = pipeline.search(&request.query).await;
    let notice = state.finish_search(&request.query, result);

    SearchMoviesResponse {
        notice,
        results: state.search_results().to_vec(),
    }
}

pub async fn get_streaming_offers(
    title: &str,
    pipeline: &SearchPipeline,
) -> Result<Vec<StreamingOffer>, String> {
    pipeline
        .fetch_offers(title)
        .await
        .map_err(|e| e.to_string())
}
