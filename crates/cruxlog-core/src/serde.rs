//! Helpers for JSON payloads stored in text columns.
//!
//! Several tables keep free-form structures (goal criteria, program
//! structure, template exercise lists) as JSON strings. These helpers
//! give every reader the same defined default instead of each call site
//! improvising a parse-or-fallback.

use serde_json::Value;

/// Parses a stored JSON object column; absent or unparseable data
/// becomes an empty object.
pub fn json_object_or_default(raw: Option<&str>) -> Value {
    raw.and_then(|s| serde_json::from_str::<Value>(s).ok())
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// Parses a stored JSON array column; absent or unparseable data
/// becomes an empty array.
pub fn json_array_or_default(raw: Option<&str>) -> Value {
    raw.and_then(|s| serde_json::from_str::<Value>(s).ok())
        .filter(Value::is_array)
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

/// Serializes a JSON value for storage in a text column.
pub fn to_json_string(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_round_trip() {
        let value = json!({"min_grade": "7a", "min_length": 200});
        let stored = to_json_string(&value);
        assert_eq!(json_object_or_default(Some(&stored)), value);
    }

    #[test]
    fn test_object_default_on_none() {
        assert_eq!(json_object_or_default(None), json!({}));
    }

    #[test]
    fn test_object_default_on_garbage() {
        assert_eq!(json_object_or_default(Some("{not json")), json!({}));
    }

    #[test]
    fn test_object_default_on_wrong_shape() {
        assert_eq!(json_object_or_default(Some("[1,2,3]")), json!({}));
    }

    #[test]
    fn test_array_round_trip() {
        let value = json!(["a", "b"]);
        let stored = to_json_string(&value);
        assert_eq!(json_array_or_default(Some(&stored)), value);
    }

    #[test]
    fn test_array_default_on_garbage() {
        assert_eq!(json_array_or_default(Some("nope")), json!([]));
        assert_eq!(json_array_or_default(None), json!([]));
    }
}
