use chrono::NaiveDateTime;

use crate::modules::data_exchange::domain::value_objects::ExchangeFormat;
use crate::shared::utils::validation::Validator;

pub const EXPORT_PREFIX: &str = "film";
pub const TEMPLATE_FILE_NAME: &str = "template_film.csv";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// `<prefix>_<query>_<YYYYmmdd_HHMM>.<ext>`, or `<prefix>_<YYYYmmdd_HHMM>.<ext>`
/// when the query has nothing usable in a file name
pub fn export_filename(
    prefix: &str,
    query: &str,
    at: NaiveDateTime,
    format: ExchangeFormat,
) -> String {
    let timestamp = at.format(TIMESTAMP_FORMAT);
    let query = Validator::sanitize_filename_part(query);

    if query.is_empty() {
        format!("{}_{}.{}", prefix, timestamp, format.extension())
    } else {
        format!("{}_{}_{}.{}", prefix, query, timestamp, format.extension())
    }
}
