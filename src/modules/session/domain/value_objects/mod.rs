pub mod page;
pub mod search_filters;
pub mod search_notice;

pub use page::Page;
pub use search_filters::{default_max_year, SearchFilters, SortMode, DEFAULT_MIN_YEAR};
pub use search_notice::SearchNotice;
