pub mod search_cache;

pub use search_cache::{CacheStats, SearchCache};
