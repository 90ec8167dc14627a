pub mod entities;
pub mod repositories;

pub use entities::ProviderConfig;
pub use repositories::SearchProvider;
