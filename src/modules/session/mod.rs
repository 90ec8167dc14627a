pub mod domain;

pub use domain::{
    AppState, Page, SearchFilters, SearchNotice, SortMode, POPULAR_QUERIES, RECENT_HISTORY_LEN,
};
