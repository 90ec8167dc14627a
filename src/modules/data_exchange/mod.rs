pub mod application;
pub mod commands;
pub mod domain;

pub use application::DataExchangeService;
pub use domain::services::{export_filename, CSV_TEMPLATE};
pub use domain::{ExchangeFormat, ExportRow};
