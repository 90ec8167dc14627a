use serde_json::Value;

/// Keys hidden from the raw-data dump (image payloads are noise there)
pub const HIDDEN_RAW_FIELDS: &[&str] = &[
    "photo_url",
    "backdrops",
    "poster",
    "poster_url",
    "poster_path",
    "thumbnail",
    "image",
];

/// Copy of `raw` without poster-like keys; non-mapping values are returned as-is
pub fn redact_raw(raw: &Value) -> Value {
    match raw {
        Value::Object(map) => {
            let mut clean = map.clone();
            for key in HIDDEN_RAW_FIELDS {
                clean.remove(*key);
            }
            Value::Object(clean)
        }
        other => other.clone(),
    }
}
