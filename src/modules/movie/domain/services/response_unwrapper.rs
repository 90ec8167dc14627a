use serde_json::Value;

/// Container keys tried in order when the response is a mapping
pub const CONTAINER_KEYS: &[&str] = &["items", "results", "data", "searchResults", "description"];

/// Locate the result sequence inside a response of unknown shape.
///
/// Priority order is fixed: the top-level sequence itself, then the known
/// container keys, then a single result (mapping with `title`), then the first
/// sequence-valued entry in document order, else nothing. A container key
/// holding an empty sequence still wins.
pub fn unwrap(top: &Value) -> Vec<Value> {
    match top {
        Value::Array(items) => items.clone(),
        Value::Object(map) => {
            if let Some(items) = CONTAINER_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array))
            {
                return items.clone();
            }

            if map.contains_key("title") {
                return vec![top.clone()];
            }

            map.values()
                .find_map(Value::as_array)
                .cloned()
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}
