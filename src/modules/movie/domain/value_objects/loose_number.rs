use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A numeric field as it arrived from the source: either a JSON number or text.
///
/// Search responses usually carry real numbers; imported CSV cells are always
/// text. Coercion is deferred to the point of use (`as_f64`), and a value that
/// does not coerce is treated as absent by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(Number),
    Text(String),
}

impl LooseNumber {
    /// Keep numbers and non-blank text; everything else is not a number candidate
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(LooseNumber::Number(n.clone())),
            Value::String(s) if !s.trim().is_empty() => Some(LooseNumber::Text(s.clone())),
            _ => None,
        }
    }

    /// Numeric view of the value; `None` when text does not parse or is not finite
    pub fn as_f64(&self) -> Option<f64> {
        let parsed = match self {
            LooseNumber::Number(n) => n.as_f64(),
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok(),
        };
        parsed.filter(|v| v.is_finite())
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LooseNumber::Number(n) => write!(f, "{}", n),
            LooseNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for LooseNumber {
    fn from(value: i64) -> Self {
        LooseNumber::Number(Number::from(value))
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_coerces_lazily() {
        assert_eq!(LooseNumber::from("120").as_f64(), Some(120.0));
        assert_eq!(LooseNumber::from(" 0.95 ").as_f64(), Some(0.95));
        assert_eq!(LooseNumber::from("two hours").as_f64(), None);
        assert_eq!(LooseNumber::from("NaN").as_f64(), None);
    }

    #[test]
    fn test_from_value_kinds() {
        assert_eq!(
            LooseNumber::from_value(&json!(143)),
            Some(LooseNumber::from(143))
        );
        assert_eq!(LooseNumber::from_value(&json!("")), None);
        assert_eq!(LooseNumber::from_value(&json!(true)), None);
        assert_eq!(LooseNumber::from_value(&json!([1])), None);
    }

    #[test]
    fn test_untagged_serialization_keeps_shape() {
        assert_eq!(serde_json::to_string(&LooseNumber::from(90)).unwrap(), "90");
        assert_eq!(
            serde_json::to_string(&LooseNumber::from("90")).unwrap(),
            "\"90\""
        );
    }
}
