pub mod service;

pub use service::DataExchangeService;
