use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier for a zone within a zone set. zone systems in the wild key
/// their zones either by number or by name, so both shapes are supported
/// directly rather than coercing one into the other.
///
/// the derived ordering is the total order used wherever a deterministic
/// choice between zones is required: numeric ids compare numerically, named
/// ids compare lexicographically, and all numeric ids precede all named ids.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum ZoneId {
    Number(u64),
    Name(String),
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Number(n) => write!(f, "{}", n),
            ZoneId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ZoneId {
    fn from(value: u64) -> Self {
        ZoneId::Number(value)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId::Name(String::from(value))
    }
}

impl From<String> for ZoneId {
    fn from(value: String) -> Self {
        ZoneId::Name(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_order_numerically() {
        assert!(ZoneId::from(2) < ZoneId::from(10));
    }

    #[test]
    fn test_named_ids_order_lexicographically() {
        assert!(ZoneId::from("A") < ZoneId::from("B"));
        // lexicographic, so "10" sorts before "2" when ids are names
        assert!(ZoneId::from("10") < ZoneId::from("2"));
    }

    #[test]
    fn test_numeric_ids_precede_named_ids() {
        assert!(ZoneId::from(u64::MAX) < ZoneId::from("0"));
    }

    #[test]
    fn test_untagged_deserialization() {
        let numeric: ZoneId = serde_json::from_str("42").expect("test invariant failed");
        let named: ZoneId = serde_json::from_str("\"downtown\"").expect("test invariant failed");
        assert_eq!(numeric, ZoneId::Number(42));
        assert_eq!(named, ZoneId::Name(String::from("downtown")));
    }
}
