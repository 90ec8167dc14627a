pub mod aggregator;
pub mod field_resolver;
pub mod field_table;
pub mod record_normalizer;
pub mod redaction;
pub mod response_unwrapper;

pub use aggregator::{
    average_runtime, comparison_rows, genre_connections, rating_percent, ComparisonRow, GenreGraph,
};
pub use field_table::{FieldTable, MovieField, IMPORT_FIELDS, SEARCH_FIELDS};
pub use record_normalizer::{normalize, RecordNormalizer};
pub use response_unwrapper::unwrap;
