pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{MovieRecord, StreamingOffer};
pub use value_objects::LooseNumber;
