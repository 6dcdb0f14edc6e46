//! Closed metadata value type for provenance and caller extras.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A primitive metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Ordered string-keyed metadata map.
pub type Metadata = BTreeMap<String, MetadataValue>;

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Number(n)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Flag(b)
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Flag(b) => write!(f, "{}", b),
            MetadataValue::Number(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_primitive_kind() {
        let meta: Metadata =
            serde_json::from_str(r#"{"source":"quiz-history","weight":0.5,"passed":true}"#)
                .unwrap();
        assert_eq!(meta["source"], MetadataValue::Text("quiz-history".into()));
        assert_eq!(meta["weight"], MetadataValue::Number(0.5));
        assert_eq!(meta["passed"], MetadataValue::Flag(true));
    }

    #[test]
    fn rejects_nested_values() {
        assert!(serde_json::from_str::<Metadata>(r#"{"nested":{"a":1}}"#).is_err());
    }

    #[test]
    fn accessors_return_matching_kind_only() {
        assert_eq!(MetadataValue::from("gold").as_text(), Some("gold"));
        assert_eq!(MetadataValue::from(2.0).as_number(), Some(2.0));
        assert_eq!(MetadataValue::from(true).as_text(), None);
    }
}
