use serde::Serialize;
use std::fmt;

use crate::{
    modules::movie::MovieRecord,
    shared::errors::{AppError, AppResult},
};

/// What the user is told after a search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SearchNotice {
    /// Blank query; no request was sent
    EmptyQuery,
    Failed(String),
    NotFound,
    Found(usize),
}

impl SearchNotice {
    pub fn from_result(query: &str, result: &AppResult<Vec<MovieRecord>>) -> Self {
        match result {
            Err(AppError::ValidationError(_)) if query.trim().is_empty() => {
                SearchNotice::EmptyQuery
            }
            Err(e) => SearchNotice::Failed(e.to_string()),
            Ok(records) if records.is_empty() => SearchNotice::NotFound,
            Ok(records) => SearchNotice::Found(records.len()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchNotice::Failed(_))
    }
}

impl fmt::Display for SearchNotice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchNotice::EmptyQuery => write!(f, "Enter a movie title first."),
            SearchNotice::Failed(message) => write!(f, "Search failed: {}", message),
            SearchNotice::NotFound => write!(f, "No movies found, try another title."),
            SearchNotice::Found(count) => write!(f, "{} movies found", count),
        }
    }
}
