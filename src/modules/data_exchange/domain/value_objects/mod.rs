pub mod exchange_format;

pub use exchange_format::ExchangeFormat;
