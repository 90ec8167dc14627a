pub mod entities;
pub mod value_objects;

pub use entities::AppState;
pub use value_objects::{Page, SearchFilters, SearchNotice, SortMode};

/// Quick-pick titles shown on the start page
pub const POPULAR_QUERIES: [&str; 5] = ["Avengers", "Spider Man", "Batman", "Avatar", "Iron Man"];

/// How many past queries the search page offers again
pub const RECENT_HISTORY_LEN: usize = 3;
