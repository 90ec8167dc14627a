mod utils;

use async_trait::async_trait;
use mockall::{mock, Sequence};
use reelscout_lib::modules::{
    movie::{domain::services::normalize, MovieRecord},
    provider::{commands::search_movies, commands::SearchMoviesRequest, SearchProvider},
    session::{AppState, Page, SearchFilters, SearchNotice, SortMode},
};
use reelscout_lib::shared::errors::{AppError, AppResult};
use serde_json::{json, Value};
use std::sync::Arc;
use utils::{factories::raw_item, helpers::build_pipeline};

mock! {
    pub Provider {}

    #[async_trait]
    impl SearchProvider for Provider {
        fn name(&self) -> &str;
        async fn search_raw(&self, query: &str) -> AppResult<Value>;
    }
}

fn provider_returning(body: Value, times: usize) -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("Mock".to_string());
    provider
        .expect_search_raw()
        .times(times)
        .returning(move |_| Ok(body.clone()));
    provider
}

#[tokio::test]
async fn test_empty_query_never_reaches_provider() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("Mock".to_string());
    provider.expect_search_raw().never();
    let pipeline = build_pipeline(Arc::new(provider));

    for query in ["", "   ", "\t\n"] {
        let err = pipeline.search(query).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}

#[tokio::test]
async fn test_cache_hit_matches_fresh_normalization() {
    let body = json!({"items": [
        raw_item("Avatar", 2009),
        raw_item("Avatar: The Way of Water", 2022)
    ]});
    let expected: Vec<MovieRecord> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(normalize)
        .collect();

    let pipeline = build_pipeline(Arc::new(provider_returning(body, 1)));
    let fresh = pipeline.search("Avatar").await.unwrap();
    let cached = pipeline.search("Avatar").await.unwrap();

    assert_eq!(fresh, expected);
    assert_eq!(cached, expected);
    let stats = pipeline.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.entries_count, 1);
}

#[tokio::test]
async fn test_query_is_trimmed_before_the_call() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("Mock".to_string());
    provider
        .expect_search_raw()
        .times(1)
        .returning(|query| {
            assert_eq!(query, "Batman");
            Ok(json!([]))
        });
    let pipeline = build_pipeline(Arc::new(provider));

    assert!(pipeline.search("  Batman ").await.unwrap().is_empty());
    // same key after trimming, served from cache
    assert!(pipeline.search("Batman").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_failures_are_not_cached() {
    let timeout = AppError::TransportError("Mock API did not answer within 8s".into());
    let found = json!({"results": [{"title": "Dune", "year": "2021-10-22"}]});
    let mut seq = Sequence::new();
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("Mock".to_string());
    provider
        .expect_search_raw()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Err(timeout.clone()));
    provider
        .expect_search_raw()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(found.clone()));
    let pipeline = build_pipeline(Arc::new(provider));

    let err = pipeline.search("Dune").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("8s"));

    let records = pipeline.search("Dune").await.unwrap();
    assert_eq!(records[0].year, "2021");
}

#[tokio::test]
async fn test_search_command_updates_session() {
    let body = json!([
        raw_item("Spider-Man", 2002),
        raw_item("Spider-Man: No Way Home", 2021),
        raw_item("Spider-Man", 1977)
    ]);
    let pipeline = build_pipeline(Arc::new(provider_returning(body, 1)));
    let mut state = AppState::new();

    let response = search_movies(
        SearchMoviesRequest {
            query: "Spider Man".to_string(),
            filters: SearchFilters::new(1990, 2024, SortMode::YearNewest).unwrap(),
        },
        &pipeline,
        &mut state,
    )
    .await;

    assert_eq!(response.notice, SearchNotice::Found(2));
    assert_eq!(state.page(), Page::Search);
    assert_eq!(state.last_query(), "Spider Man");
    assert_eq!(state.recent_history(3), vec!["Spider Man"]);
    let years: Vec<&str> = response.results.iter().map(|r| r.year.as_str()).collect();
    assert_eq!(years, vec!["2021", "2002"]);
}

#[tokio::test]
async fn test_search_command_reports_failure() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("Mock".to_string());
    provider
        .expect_search_raw()
        .returning(|_| {
            Err(AppError::TransportError("connection refused".into()))
        });
    let pipeline = build_pipeline(Arc::new(provider));
    let mut state = AppState::new();

    let response = search_movies(
        SearchMoviesRequest {
            query: "Dune".to_string(),
            filters: SearchFilters::default(),
        },
        &pipeline,
        &mut state,
    )
    .await;

    assert!(matches!(
        response.notice,
        SearchNotice::Failed(ref m) if m.contains("connection refused")
    ));
    assert!(response.results.is_empty());
}

#[test]
fn test_empty_result_is_not_found() {
    let pipeline = build_pipeline(Arc::new(provider_returning(json!({"items": []}), 1)));
    let mut state = AppState::new();

    let response = tokio_test::block_on(search_movies(
        SearchMoviesRequest {
            query: "zzzz".to_string(),
            filters: SearchFilters::default(),
        },
        &pipeline,
        &mut state,
    ));

    assert_eq!(response.notice, SearchNotice::NotFound);
}

#[tokio::test]
async fn test_offers_sub_query_uses_first_result() {
    let body = json!({"items": [raw_item("Avatar", 2009), raw_item("Avatar 2", 2022)]});
    let pipeline = build_pipeline(Arc::new(provider_returning(body, 1)));

    let offers = pipeline.fetch_offers("Avatar").await.unwrap();
    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].url, "https://netflix.com/x");
}
