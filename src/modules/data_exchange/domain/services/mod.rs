pub mod codec;
pub mod file_naming;

pub use codec::{from_csv, from_json, import_csv, to_csv, to_json, CSV_TEMPLATE};
pub use file_naming::{export_filename, EXPORT_PREFIX, TEMPLATE_FILE_NAME};
