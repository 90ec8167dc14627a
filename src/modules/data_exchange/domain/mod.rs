pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::ExportRow;
pub use value_objects::ExchangeFormat;
