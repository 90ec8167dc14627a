use serde_json::Value;

use super::field_table::{FieldTable, MovieField, Resolved, IMPORT_FIELDS, SEARCH_FIELDS};
use crate::modules::movie::domain::entities::MovieRecord;

/// Maps raw items onto `MovieRecord` using one field table
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer {
    table: &'static FieldTable,
}

impl RecordNormalizer {
    pub fn new(table: &'static FieldTable) -> Self {
        Self { table }
    }

    /// Normalizer for search-result items
    pub fn for_search() -> Self {
        Self::new(&SEARCH_FIELDS)
    }

    /// Normalizer for rows of imported files
    pub fn for_import() -> Self {
        Self::new(&IMPORT_FIELDS)
    }

    /// Never fails: non-mapping items become degenerate records holding only `raw`
    pub fn normalize(&self, raw: &Value) -> MovieRecord {
        let Some(item) = raw.as_object() else {
            log::debug!(
                "Normalizer[{}]: keeping malformed item as degenerate record",
                self.table.name
            );
            return MovieRecord::degenerate(raw.clone());
        };

        let mut record = MovieRecord::degenerate(raw.clone());
        for spec in self.table.specs {
            let resolved = spec.coercion.apply(item, spec.candidates);
            assign(&mut record, spec.field, resolved);
        }
        record
    }

    pub fn normalize_all(&self, raw_items: &[Value]) -> Vec<MovieRecord> {
        raw_items.iter().map(|item| self.normalize(item)).collect()
    }
}

/// Normalize one search-result item
pub fn normalize(raw: &Value) -> MovieRecord {
    RecordNormalizer::for_search().normalize(raw)
}

fn assign(record: &mut MovieRecord, field: MovieField, resolved: Resolved) {
    match (field, resolved) {
        (MovieField::Title, Resolved::Text(v)) => record.title = v,
        (MovieField::Year, Resolved::Text(v)) => record.year = v,
        (MovieField::PosterUrl, Resolved::Text(v)) => record.poster_url = v,
        (MovieField::Overview, Resolved::Text(v)) => record.overview = v,
        (MovieField::DetailLink, Resolved::Text(v)) => record.detail_link = v,
        (MovieField::Runtime, Resolved::Number(v)) => record.runtime = v,
        (MovieField::RatingPrimary, Resolved::Number(v)) => record.rating_primary = v,
        (MovieField::RatingSecondary, Resolved::Number(v)) => record.rating_secondary = v,
        (MovieField::RatingCertified, Resolved::Flag(v)) => record.rating_certified = v,
        (MovieField::StreamingOffers, Resolved::Offers(v)) => record.streaming_offers = v,
        (field, resolved) => {
            log::warn!("Field table maps {:?} to {:?}", field, resolved);
        }
    }
}
