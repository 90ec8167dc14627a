mod search_provider_repo;

pub use search_provider_repo::*;
