use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::streaming_offer::StreamingOffer;
use crate::modules::movie::domain::services::redaction;
use crate::modules::movie::domain::value_objects::LooseNumber;

/// Base used to resolve site-relative detail links for display
pub const DETAIL_LINK_BASE: &str = "https://www.imdb.com";

/// Canonical movie record every downstream component works with.
///
/// Produced once per raw item by the normalizer (search or import path) and
/// never mutated afterwards; a new search or import replaces the whole set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// First four characters of the source year/date, or a shorter value verbatim
    pub year: String,
    /// Minutes
    pub runtime: Option<LooseNumber>,
    /// `jwRating`, a fraction in [0, 1]
    pub rating_primary: Option<LooseNumber>,
    /// `tomatometer`, a percentage in [0, 100]
    pub rating_secondary: Option<LooseNumber>,
    pub rating_certified: bool,
    /// Empty or fully qualified
    pub poster_url: String,
    pub overview: String,
    pub detail_link: String,
    pub streaming_offers: Vec<StreamingOffer>,
    /// Untouched source item, for diagnostics only
    pub raw: Value,
}

impl MovieRecord {
    /// Record for a malformed (non-mapping) item: only `raw` is kept
    pub fn degenerate(raw: Value) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.title.is_empty()
            && self.year.is_empty()
            && self.runtime.is_none()
            && self.poster_url.is_empty()
            && self.detail_link.is_empty()
            && !self.raw.is_object()
    }

    pub fn runtime_minutes(&self) -> Option<f64> {
        self.runtime.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn year_number(&self) -> Option<i32> {
        if self.year.chars().all(|c| c.is_ascii_digit()) {
            self.year.parse().ok()
        } else {
            None
        }
    }

    /// Key used by the favorites list
    pub fn favorite_id(&self) -> String {
        format!("{}_{}", self.title, self.year)
    }

    /// Detail link suitable for a browser: site-relative paths get the IMDb host
    pub fn absolute_detail_link(&self) -> Option<String> {
        if self.detail_link.is_empty() {
            None
        } else if self.detail_link.starts_with('/') && !self.detail_link.starts_with("//") {
            Some(format!("{}{}", DETAIL_LINK_BASE, self.detail_link))
        } else {
            Some(self.detail_link.clone())
        }
    }

    /// Copy of `raw` with poster-like keys removed, for the diagnostic dump
    pub fn redacted_raw(&self) -> Value {
        redaction::redact_raw(&self.raw)
    }
}
