pub mod data_exchange;
pub mod movie;
pub mod provider;
pub mod session;
