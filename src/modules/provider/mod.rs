pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

pub use application::SearchPipeline;
pub use domain::{ProviderConfig, SearchProvider};
pub use infrastructure::adapters::JustWatchAdapter;
