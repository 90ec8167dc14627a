use serde::{Serialize, Serializer};

use crate::modules::movie::{LooseNumber, MovieRecord, StreamingOffer};

/// Column order shared by JSON and CSV exports
pub const EXPORT_COLUMNS: [&str; 9] = [
    "title",
    "year",
    "runtime",
    "rating_primary",
    "rating_secondary",
    "rating_certified",
    "overview",
    "poster_url",
    "detail_link",
];

pub const CSV_OVERVIEW_MAX_CHARS: usize = 100;

/// Exported projection of a `MovieRecord`; `raw` is never part of it
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow<'a> {
    pub title: &'a str,
    pub year: &'a str,
    #[serde(serialize_with = "blank_if_absent")]
    pub runtime: Option<&'a LooseNumber>,
    #[serde(serialize_with = "blank_if_absent")]
    pub rating_primary: Option<&'a LooseNumber>,
    #[serde(serialize_with = "blank_if_absent")]
    pub rating_secondary: Option<&'a LooseNumber>,
    pub rating_certified: bool,
    pub overview: &'a str,
    pub poster_url: &'a str,
    pub detail_link: &'a str,
    #[serde(skip_serializing_if = "<[StreamingOffer]>::is_empty")]
    pub streaming_offers: &'a [StreamingOffer],
}

impl<'a> From<&'a MovieRecord> for ExportRow<'a> {
    fn from(record: &'a MovieRecord) -> Self {
        Self {
            title: &record.title,
            year: &record.year,
            runtime: record.runtime.as_ref(),
            rating_primary: record.rating_primary.as_ref(),
            rating_secondary: record.rating_secondary.as_ref(),
            rating_certified: record.rating_certified,
            overview: &record.overview,
            poster_url: &record.poster_url,
            detail_link: &record.detail_link,
            streaming_offers: &record.streaming_offers,
        }
    }
}

impl ExportRow<'_> {
    /// One CSV line in `EXPORT_COLUMNS` order, overview cut to 100 characters
    pub fn csv_cells(&self) -> [String; 9] {
        [
            self.title.to_string(),
            self.year.to_string(),
            cell(self.runtime),
            cell(self.rating_primary),
            cell(self.rating_secondary),
            self.rating_certified.to_string(),
            self.overview.chars().take(CSV_OVERVIEW_MAX_CHARS).collect(),
            self.poster_url.to_string(),
            self.detail_link.to_string(),
        ]
    }
}

fn cell(value: Option<&LooseNumber>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn blank_if_absent<S>(value: &Option<&LooseNumber>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(number) => number.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_numbers_are_blank() {
        let record = MovieRecord {
            title: "Dilan 1990".to_string(),
            year: "2018".to_string(),
            runtime: Some(LooseNumber::from(110)),
            ..MovieRecord::default()
        };
        let value = serde_json::to_value(ExportRow::from(&record)).unwrap();
        assert_eq!(value["runtime"], json!(110));
        assert_eq!(value["rating_primary"], json!(""));
        assert_eq!(value["rating_certified"], json!(false));
        assert!(value.get("streaming_offers").is_none());
        assert!(value.get("raw").is_none());
    }

    #[test]
    fn test_csv_cells_truncate_overview() {
        let record = MovieRecord {
            title: "Long".to_string(),
            overview: "x".repeat(250),
            rating_certified: true,
            ..MovieRecord::default()
        };
        let cells = ExportRow::from(&record).csv_cells();
        assert_eq!(cells[6].chars().count(), CSV_OVERVIEW_MAX_CHARS);
        assert_eq!(cells[5], "true");
        assert_eq!(cells[2], "");
    }
}
