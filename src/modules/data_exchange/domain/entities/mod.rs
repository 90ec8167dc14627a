pub mod export_row;

pub use export_row::{ExportRow, CSV_OVERVIEW_MAX_CHARS, EXPORT_COLUMNS};
