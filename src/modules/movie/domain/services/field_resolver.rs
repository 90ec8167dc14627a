//! Key-fallback resolution over loosely shaped JSON mappings.
//!
//! Every resolver walks an ordered candidate list and takes the first key whose
//! value is present and non-empty, then applies a field-class coercion. Nothing
//! here fails: a missing or mistyped value resolves to the field's empty default.

use serde_json::{Map, Value};

use crate::modules::movie::domain::entities::{dedupe_offers, StreamingOffer};
use crate::modules::movie::domain::value_objects::LooseNumber;

pub const OFFER_NAME_KEYS: &[&str] = &["name", "provider", "provider_name", "clear_name"];
pub const OFFER_TYPE_KEYS: &[&str] = &["type", "monetization_type"];
pub const OFFER_URL_KEYS: &[&str] = &["url", "standard_web_url", "deeplink"];

/// Values that count as "not provided": null, false, zero, and empty text/list/mapping
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|v| v == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// First present, non-empty value among `keys`, in order
pub fn resolve<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !is_empty_value(value))
}

/// Text field: strings verbatim, numbers rendered, anything else empty
pub fn resolve_text(record: &Map<String, Value>, keys: &[&str]) -> String {
    match resolve(record, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Year field: keep the first four characters of anything at least that long.
/// Shorter values pass through unchanged.
pub fn resolve_year(record: &Map<String, Value>, keys: &[&str]) -> String {
    truncate_year(&resolve_text(record, keys))
}

pub fn truncate_year(value: &str) -> String {
    if value.chars().count() >= 4 {
        value.chars().take(4).collect()
    } else {
        value.to_string()
    }
}

/// Text field that some sources send as a list: the first element wins, and a
/// non-text first element is discarded
pub fn resolve_scalar_or_first_of_list(record: &Map<String, Value>, keys: &[&str]) -> String {
    match resolve(record, keys) {
        Some(Value::Array(items)) => match items.first() {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        },
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// URL field: scalar-or-first, with protocol-relative `//host/path` repaired to https
pub fn resolve_url(record: &Map<String, Value>, keys: &[&str]) -> String {
    repair_scheme(resolve_scalar_or_first_of_list(record, keys))
}

pub fn repair_scheme(url: String) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url
    }
}

/// Boolean field, defaulting to false
pub fn resolve_bool(record: &Map<String, Value>, keys: &[&str]) -> bool {
    match resolve(record, keys) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Numeric field kept in its source form; coercion happens at the point of use
pub fn resolve_loose_number(record: &Map<String, Value>, keys: &[&str]) -> Option<LooseNumber> {
    resolve(record, keys).and_then(LooseNumber::from_value)
}

/// Streaming offers: a list of mappings, deduplicated by url
pub fn resolve_offers(record: &Map<String, Value>, keys: &[&str]) -> Vec<StreamingOffer> {
    match resolve(record, keys) {
        Some(value) => offers_from_value(value),
        None => Vec::new(),
    }
}

pub fn offers_from_value(value: &Value) -> Vec<StreamingOffer> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    let offers = items
        .iter()
        .filter_map(Value::as_object)
        .map(|offer| StreamingOffer {
            name: resolve_text(offer, OFFER_NAME_KEYS),
            offer_type: resolve_text(offer, OFFER_TYPE_KEYS),
            url: resolve_url(offer, OFFER_URL_KEYS),
        })
        .collect();

    dedupe_offers(offers)
}
