use crate::{
    modules::{
        movie::MovieRecord,
        session::domain::value_objects::{Page, SearchFilters, SearchNotice},
    },
    shared::errors::{AppError, AppResult},
};

/// Everything one browsing session remembers. Owned by the caller and passed
/// by `&mut` to whatever handles the current interaction.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    page: Page,
    last_query: String,
    search_history: Vec<String>,
    favorites: Vec<String>,
    search_results: Vec<MovieRecord>,
    imported: Vec<MovieRecord>,
    filters: SearchFilters,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: SearchFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn navigate(&mut self, next: Page) -> AppResult<()> {
        if !self.page.can_transition_to(&next) {
            return Err(AppError::InvalidTransition(format!(
                "cannot go from {} to {}",
                self.page, next
            )));
        }
        if let Page::Detail(index) = next {
            if index >= self.search_results.len() {
                return Err(AppError::InvalidInput(format!(
                    "No search result at position {}",
                    index
                )));
            }
        }

        log::debug!("Page {} -> {}", self.page, next);
        self.page = next;
        Ok(())
    }

    /// The record shown on the detail page, if that is where we are
    pub fn selected(&self) -> Option<&MovieRecord> {
        match self.page {
            Page::Detail(index) => self.search_results.get(index),
            _ => None,
        }
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Remember the query as typed; non-blank queries enter the history once
    pub fn record_query(&mut self, query: &str) {
        if !query.trim().is_empty() && !self.search_history.iter().any(|q| q == query) {
            self.search_history.push(query.to_string());
        }
        self.last_query = query.to_string();
    }

    pub fn search_history(&self) -> &[String] {
        &self.search_history
    }

    /// Up to `n` most recent queries, newest first
    pub fn recent_history(&self, n: usize) -> Vec<&str> {
        self.search_history
            .iter()
            .rev()
            .take(n)
            .map(String::as_str)
            .collect()
    }

    /// Returns whether the record is a favorite after the toggle
    pub fn toggle_favorite(&mut self, record: &MovieRecord) -> bool {
        let id = record.favorite_id();
        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    pub fn is_favorite(&self, record: &MovieRecord) -> bool {
        let id = record.favorite_id();
        self.favorites.iter().any(|f| *f == id)
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn filters(&self) -> SearchFilters {
        self.filters
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub fn search_results(&self) -> &[MovieRecord] {
        &self.search_results
    }

    /// Replaces (never merges) the current result set with the filtered view
    pub fn replace_results(&mut self, records: Vec<MovieRecord>) {
        self.search_results = self.filters.apply(records);
        if matches!(self.page, Page::Detail(_)) {
            self.page = Page::Search;
        }
    }

    /// Apply a finished search to the session and say what to show.
    /// Failed searches keep the previous results.
    pub fn finish_search(
        &mut self,
        query: &str,
        result: AppResult<Vec<MovieRecord>>,
    ) -> SearchNotice {
        self.record_query(query);
        let notice = SearchNotice::from_result(query, &result);
        if let Ok(records) = result {
            self.replace_results(records);
            if let SearchNotice::Found(_) = notice {
                return SearchNotice::Found(self.search_results.len());
            }
        }
        notice
    }

    pub fn imported(&self) -> &[MovieRecord] {
        &self.imported
    }

    pub fn replace_imported(&mut self, records: Vec<MovieRecord>) {
        self.imported = records;
    }
}
