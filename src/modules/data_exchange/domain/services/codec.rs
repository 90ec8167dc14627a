//! JSON/CSV exchange format for movie lists.
//!
//! Exports write a fixed projection (see `ExportRow`). Imports accept both the
//! canonical column names and the legacy/localized ones (`judul`, `tahun`,
//! `jwRating`, ...) because every row goes back through the import field table.

use serde_json::{Map, Value};

use crate::{
    modules::{
        data_exchange::domain::entities::{ExportRow, EXPORT_COLUMNS},
        movie::{MovieRecord, RecordNormalizer},
    },
    shared::errors::{AppError, AppResult},
};

/// Header plus one example row, offered as a starting point for CSV imports
pub const CSV_TEMPLATE: &str =
    "title,year,runtime,rating_primary,rating_secondary\nAvengers,2012,143,0.95,92\n";

/// Pretty-printed JSON array of the export projection
pub fn to_json(records: &[MovieRecord]) -> AppResult<String> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn to_csv(records: &[MovieRecord]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.write_record(ExportRow::from(record).csv_cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| {
        AppError::SerializationError(format!("CSV output is not UTF-8: {}", e))
    })
}

/// The document must be a JSON array; each element is re-resolved through the
/// import table, so non-mapping elements become degenerate records.
pub fn from_json(text: &str) -> AppResult<Vec<MovieRecord>> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(items) = document else {
        return Err(AppError::ValidationError(
            "Imported JSON must be a list of movies".to_string(),
        ));
    };
    Ok(RecordNormalizer::for_import().normalize_all(&items))
}

/// Rows keyed by the header verbatim, every cell kept as text.
/// Short rows simply lack the trailing keys.
pub fn from_csv(text: &str) -> AppResult<Vec<Map<String, Value>>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, cell)| {
                (key.to_string(), Value::String(cell.to_string()))
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// `from_csv` followed by normalization through the import table
pub fn import_csv(text: &str) -> AppResult<Vec<MovieRecord>> {
    let normalizer = RecordNormalizer::for_import();
    Ok(from_csv(text)?
        .into_iter()
        .map(|row| normalizer.normalize(&Value::Object(row)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movie::{LooseNumber, StreamingOffer};
    use serde_json::json;

    fn dune() -> MovieRecord {
        MovieRecord {
            title: "Dune".to_string(),
            year: "2021".to_string(),
            runtime: Some(LooseNumber::from(155)),
            rating_primary: serde_json::Number::from_f64(0.83).map(LooseNumber::Number),
            overview: "Paul Atreides, a brilliant and gifted young man".to_string(),
            poster_url: "https://images.example/dune.jpg".to_string(),
            detail_link: "/title/tt1160419".to_string(),
            streaming_offers: vec![StreamingOffer::new(
                "Max",
                "FLATRATE",
                "https://max.com/dune",
            )],
            raw: json!({"title": "Dune", "poster": "https://images.example/dune.jpg"}),
            ..MovieRecord::default()
        }
    }

    #[test]
    fn test_json_projection_order() {
        let text = to_json(&[dune()]).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&String> = value[0].as_object().unwrap().keys().collect();
        let mut expected: Vec<&str> = EXPORT_COLUMNS.to_vec();
        expected.push("streaming_offers");
        assert_eq!(keys, expected);
        assert!(text.contains("\n  "));
    }

    #[test]
    fn test_json_round_trip() {
        let original = vec![dune(), MovieRecord {
            title: "Untitled".to_string(),
            ..MovieRecord::default()
        }];
        let restored = from_json(&to_json(&original).unwrap()).unwrap();

        assert_eq!(restored.len(), 2);
        for (a, b) in original.iter().zip(&restored) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.year, b.year);
            assert_eq!(a.runtime, b.runtime);
            assert_eq!(a.overview, b.overview);
            assert_eq!(a.poster_url, b.poster_url);
            assert_eq!(a.detail_link, b.detail_link);
        }
        assert_eq!(restored[0].streaming_offers, original[0].streaming_offers);
    }

    #[test]
    fn test_from_json_requires_list() {
        assert!(matches!(
            from_json(r#"{"title": "Dune"}"#),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            from_json("not json"),
            Err(AppError::SerializationError(_))
        ));
    }

    #[test]
    fn test_from_json_localized_keys() {
        let text = r#"[{"judul": "Laskar Pelangi", "tahun": "2008", "durasi": "124"}]"#;
        let records = from_json(text).unwrap();
        assert_eq!(records[0].title, "Laskar Pelangi");
        assert_eq!(records[0].year, "2008");
        assert_eq!(records[0].runtime_minutes(), Some(124.0));
    }

    #[test]
    fn test_csv_export_has_header_and_no_offers() {
        let text = to_csv(&[dune()]).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), EXPORT_COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Dune,2021,155,0.83,,false,"));
        assert!(!text.contains("max.com"));
    }

    #[test]
    fn test_from_csv_keeps_text() {
        let rows = from_csv("title,year,runtime\nAvengers,2012,143\nShort\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["runtime"], json!("143"));
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_template_imports_cleanly() {
        let records = import_csv(CSV_TEMPLATE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Avengers");
        assert_eq!(
            records[0].rating_primary.as_ref().and_then(|n| n.as_f64()),
            Some(0.95)
        );
        assert_eq!(records[0].rating_secondary, Some(LooseNumber::from("92")));
    }
}
