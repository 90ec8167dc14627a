pub mod json_client;

pub use json_client::JsonHttpClient;
