pub mod commands;
pub mod domain;

pub use domain::{
    services::{RecordNormalizer, IMPORT_FIELDS, SEARCH_FIELDS},
    LooseNumber, MovieRecord, StreamingOffer,
};
