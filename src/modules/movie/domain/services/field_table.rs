//! Target field → ordered candidate keys + coercion.
//!
//! The search path and the import path share one normalizer and differ only in
//! which table they hand it.

use serde_json::{Map, Value};

use super::field_resolver;
use crate::modules::movie::domain::entities::StreamingOffer;
use crate::modules::movie::domain::value_objects::LooseNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Title,
    Year,
    Runtime,
    RatingPrimary,
    RatingSecondary,
    RatingCertified,
    PosterUrl,
    Overview,
    DetailLink,
    StreamingOffers,
}

impl MovieField {
    pub const ALL: [MovieField; 10] = [
        MovieField::Title,
        MovieField::Year,
        MovieField::Runtime,
        MovieField::RatingPrimary,
        MovieField::RatingSecondary,
        MovieField::RatingCertified,
        MovieField::PosterUrl,
        MovieField::Overview,
        MovieField::DetailLink,
        MovieField::StreamingOffers,
    ];

    /// Canonical key, as written by the export codec
    pub fn key(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Year => "year",
            MovieField::Runtime => "runtime",
            MovieField::RatingPrimary => "rating_primary",
            MovieField::RatingSecondary => "rating_secondary",
            MovieField::RatingCertified => "rating_certified",
            MovieField::PosterUrl => "poster_url",
            MovieField::Overview => "overview",
            MovieField::DetailLink => "detail_link",
            MovieField::StreamingOffers => "streaming_offers",
        }
    }

    /// Whether a coercion produces the kind of value this field stores
    pub fn accepts(&self, coercion: Coercion) -> bool {
        match self {
            MovieField::Title | MovieField::Overview | MovieField::DetailLink => {
                matches!(coercion, Coercion::Text | Coercion::Url)
            }
            MovieField::Year => matches!(coercion, Coercion::Year | Coercion::Text),
            MovieField::PosterUrl => matches!(coercion, Coercion::Url),
            MovieField::Runtime | MovieField::RatingPrimary | MovieField::RatingSecondary => {
                matches!(coercion, Coercion::LooseNumber)
            }
            MovieField::RatingCertified => matches!(coercion, Coercion::Bool),
            MovieField::StreamingOffers => matches!(coercion, Coercion::Offers),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Text,
    Year,
    LooseNumber,
    Bool,
    Url,
    Offers,
}

/// Output of one coercion, ready to be assigned to a record field
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Text(String),
    Number(Option<LooseNumber>),
    Flag(bool),
    Offers(Vec<StreamingOffer>),
}

impl Coercion {
    pub fn apply(&self, record: &Map<String, Value>, candidates: &[&str]) -> Resolved {
        match self {
            Coercion::Text => Resolved::Text(field_resolver::resolve_text(record, candidates)),
            Coercion::Year => Resolved::Text(field_resolver::resolve_year(record, candidates)),
            Coercion::Url => Resolved::Text(field_resolver::resolve_url(record, candidates)),
            Coercion::LooseNumber => {
                Resolved::Number(field_resolver::resolve_loose_number(record, candidates))
            }
            Coercion::Bool => Resolved::Flag(field_resolver::resolve_bool(record, candidates)),
            Coercion::Offers => {
                Resolved::Offers(field_resolver::resolve_offers(record, candidates))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: MovieField,
    pub candidates: &'static [&'static str],
    pub coercion: Coercion,
}

const fn spec(
    field: MovieField,
    candidates: &'static [&'static str],
    coercion: Coercion,
) -> FieldSpec {
    FieldSpec {
        field,
        candidates,
        coercion,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    pub name: &'static str,
    pub specs: &'static [FieldSpec],
}

impl FieldTable {
    pub fn spec_for(&self, field: MovieField) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.field == field)
    }

    pub fn candidates(&self, field: MovieField) -> &'static [&'static str] {
        self.spec_for(field).map(|s| s.candidates).unwrap_or(&[])
    }
}

/// Keys seen in search responses from the aggregation API
pub static SEARCH_FIELDS: FieldTable = FieldTable {
    name: "search",
    specs: &[
        spec(
            MovieField::Title,
            &["title", "name", "original_title"],
            Coercion::Text,
        ),
        spec(
            MovieField::Year,
            &["original_release_year", "year", "release_year", "release_date"],
            Coercion::Year,
        ),
        spec(MovieField::Runtime, &["runtime"], Coercion::LooseNumber),
        spec(
            MovieField::RatingPrimary,
            &["jwRating"],
            Coercion::LooseNumber,
        ),
        spec(
            MovieField::RatingSecondary,
            &["tomatometer"],
            Coercion::LooseNumber,
        ),
        spec(
            MovieField::RatingCertified,
            &["tomatocertifiedFresh"],
            Coercion::Bool,
        ),
        spec(
            MovieField::PosterUrl,
            &["poster", "poster_url", "photo_url", "thumbnail", "image", "poster_path"],
            Coercion::Url,
        ),
        spec(
            MovieField::Overview,
            &["overview", "short_description", "description", "plot"],
            Coercion::Text,
        ),
        spec(
            MovieField::DetailLink,
            &["url", "imdb_url", "original_url", "jw_url"],
            Coercion::Text,
        ),
        spec(MovieField::StreamingOffers, &["offers"], Coercion::Offers),
    ],
};

/// Keys accepted in imported files: canonical export names, the legacy export
/// names, and Indonesian-localized names
pub static IMPORT_FIELDS: FieldTable = FieldTable {
    name: "import",
    specs: &[
        spec(
            MovieField::Title,
            &["title", "judul", "name"],
            Coercion::Text,
        ),
        spec(
            MovieField::Year,
            &["year", "tahun", "release_year", "release_date"],
            Coercion::Year,
        ),
        spec(
            MovieField::Runtime,
            &["runtime", "durasi"],
            Coercion::LooseNumber,
        ),
        spec(
            MovieField::RatingPrimary,
            &["rating_primary", "jwRating", "rating"],
            Coercion::LooseNumber,
        ),
        spec(
            MovieField::RatingSecondary,
            &["rating_secondary", "tomatometer"],
            Coercion::LooseNumber,
        ),
        spec(
            MovieField::RatingCertified,
            &["rating_certified", "tomatocertifiedFresh"],
            Coercion::Bool,
        ),
        spec(
            MovieField::PosterUrl,
            &["poster_url", "poster", "gambar", "photo_url"],
            Coercion::Url,
        ),
        spec(
            MovieField::Overview,
            &["overview", "sinopsis", "deskripsi", "description"],
            Coercion::Text,
        ),
        spec(
            MovieField::DetailLink,
            &["detail_link", "link", "url", "tautan"],
            Coercion::Text,
        ),
        spec(
            MovieField::StreamingOffers,
            &["streaming_offers", "offers"],
            Coercion::Offers,
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_complete(table: &FieldTable) {
        for field in MovieField::ALL {
            let spec = table
                .spec_for(field)
                .unwrap_or_else(|| panic!("{} table is missing {:?}", table.name, field));
            assert!(
                field.accepts(spec.coercion),
                "{} table: {:?} cannot take {:?}",
                table.name,
                field,
                spec.coercion
            );
            assert!(!spec.candidates.is_empty());
        }
        assert_eq!(table.specs.len(), MovieField::ALL.len());
    }

    #[test]
    fn test_search_table_covers_every_field() {
        assert_complete(&SEARCH_FIELDS);
    }

    #[test]
    fn test_import_table_covers_every_field() {
        assert_complete(&IMPORT_FIELDS);
    }

    #[test]
    fn test_import_table_accepts_canonical_keys() {
        for field in MovieField::ALL {
            assert_eq!(IMPORT_FIELDS.candidates(field)[0], field.key());
        }
    }

    #[test]
    fn test_search_title_order() {
        assert_eq!(
            SEARCH_FIELDS.candidates(MovieField::Title),
            &["title", "name", "original_title"]
        );
    }
}
