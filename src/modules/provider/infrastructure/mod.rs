pub mod adapters;
pub mod cache;
pub mod http_client;
