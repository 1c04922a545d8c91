//! Flattening of nested JSON into ordered (path, value) pairs.
//!
//! Every scalar leaf of the input produces exactly one [`FlatEntry`]. Paths
//! join object keys and array indices with a separator (`.` by default):
//!
//! ```
//! use docubridge::flatten::flatten;
//! use serde_json::json;
//!
//! let entries = flatten(&json!({"name": "Test", "tags": ["a", "b"]}));
//! let pairs: Vec<_> = entries
//!     .iter()
//!     .map(|e| (e.path.as_str(), e.value.as_str()))
//!     .collect();
//! assert_eq!(pairs, vec![("name", "Test"), ("tags.0", "a"), ("tags.1", "b")]);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default path separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A single flattened leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    /// Separator-joined keys and indices from the root to the leaf
    pub path: String,
    /// Canonical string form of the scalar
    pub value: String,
}

impl FlatEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Flatten a JSON value using the default `.` separator.
pub fn flatten(value: &Value) -> Vec<FlatEntry> {
    flatten_with_separator(value, DEFAULT_SEPARATOR)
}

/// Flatten a JSON value, joining path segments with `separator`.
///
/// Traversal is depth-first pre-order over an explicit stack, so deeply
/// nested input cannot exhaust the call stack. Object keys are visited in
/// insertion order and array elements in index order. Empty objects and
/// arrays contribute nothing; a scalar root yields one entry with an empty
/// path.
pub fn flatten_with_separator(value: &Value, separator: &str) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    let mut stack: Vec<(&Value, String)> = vec![(value, String::new())];

    while let Some((node, prefix)) = stack.pop() {
        match node {
            // Children are pushed in reverse so they pop in document order.
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((child, format!("{}{}{}", prefix, key, separator)));
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate().rev() {
                    stack.push((child, format!("{}{}{}", prefix, index, separator)));
                }
            }
            scalar => {
                let path = prefix
                    .strip_suffix(separator)
                    .unwrap_or(prefix.as_str())
                    .to_string();
                entries.push(FlatEntry {
                    path,
                    value: scalar_to_string(scalar),
                });
            }
        }
    }

    entries
}

/// Parse JSON text without a nesting limit.
///
/// serde_json stops at 128 levels by default; here the recursion limit is
/// lifted and the stack grows on demand instead, so any syntactically valid
/// document parses. Trailing non-whitespace is rejected.
pub fn parse_unbounded(data: &[u8]) -> serde_json::Result<Value> {
    let mut json = serde_json::Deserializer::from_slice(data);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    if let Err(e) = json.end() {
        release(value);
        return Err(e);
    }
    Ok(value)
}

/// Drop a value without recursing into it.
///
/// `Value`'s own drop glue recurses once per nesting level.
pub fn release(value: Value) {
    let mut stack = vec![value];
    while let Some(mut node) = stack.pop() {
        match &mut node {
            Value::Array(items) => stack.append(items),
            Value::Object(map) => stack.extend(std::mem::take(map).into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

/// Render a scalar in its canonical string form.
///
/// Strings are returned without quotes; numbers, booleans and null use their
/// JSON spelling.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Count the scalar leaves of a JSON value.
pub fn count_leaves(value: &Value) -> usize {
    let mut count = 0;
    let mut stack = vec![value];
    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => stack.extend(map.values()),
            Value::Array(items) => stack.extend(items.iter()),
            _ => count += 1,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(entries: &[FlatEntry]) -> Vec<(&str, &str)> {
        entries
            .iter()
            .map(|e| (e.path.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn test_flatten_object_with_array() {
        let value = json!({"name": "DocuBridge Test", "features": ["A", "B"]});
        let entries = flatten(&value);
        assert_eq!(
            pairs(&entries),
            vec![
                ("name", "DocuBridge Test"),
                ("features.0", "A"),
                ("features.1", "B"),
            ]
        );
    }

    #[test]
    fn test_flatten_preserves_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": {"y": 3, "b": 4}}"#).unwrap();
        let entries = flatten(&value);
        assert_eq!(
            pairs(&entries),
            vec![("z", "1"), ("a", "2"), ("m.y", "3"), ("m.b", "4")]
        );
    }

    #[test]
    fn test_flatten_scalar_forms() {
        let value = json!({"s": "text", "i": 42, "f": 1.5, "neg": -3, "t": true, "f2": false, "n": null});
        let entries = flatten(&value);
        assert_eq!(
            pairs(&entries),
            vec![
                ("s", "text"),
                ("i", "42"),
                ("f", "1.5"),
                ("neg", "-3"),
                ("t", "true"),
                ("f2", "false"),
                ("n", "null"),
            ]
        );
    }

    #[test]
    fn test_flatten_empty_containers() {
        assert!(flatten(&json!({})).is_empty());
        assert!(flatten(&json!([])).is_empty());

        let value = json!({"a": {}, "b": [], "c": [[], {}], "d": 1});
        assert_eq!(pairs(&flatten(&value)), vec![("d", "1")]);
    }

    #[test]
    fn test_flatten_scalar_root() {
        let entries = flatten(&json!("hello"));
        assert_eq!(pairs(&entries), vec![("", "hello")]);

        let entries = flatten(&json!(7));
        assert_eq!(pairs(&entries), vec![("", "7")]);
    }

    #[test]
    fn test_flatten_array_root() {
        let value = json!([{"id": 1}, {"id": 2}, "x"]);
        assert_eq!(
            pairs(&flatten(&value)),
            vec![("0.id", "1"), ("1.id", "2"), ("2", "x")]
        );
    }

    #[test]
    fn test_flatten_custom_separator() {
        let value = json!({"a": {"b": [true]}});
        let entries = flatten_with_separator(&value, "/");
        assert_eq!(pairs(&entries), vec![("a/b/0", "true")]);

        let entries = flatten_with_separator(&value, "::");
        assert_eq!(pairs(&entries), vec![("a::b::0", "true")]);
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let depth = 10_000;
        let mut value = Value::String("leaf".to_string());
        for _ in 0..depth {
            value = Value::Array(vec![value]);
        }

        let entries = flatten(&value);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "leaf");
        assert_eq!(entries[0].path.split('.').count(), depth);
        assert_eq!(count_leaves(&value), 1);

        release(value);
    }

    #[test]
    fn test_parse_unbounded_deep_document() {
        let depth = 5_000;
        let text = format!("{}{}{}", "[".repeat(depth), "1", "]".repeat(depth));
        let value = parse_unbounded(text.as_bytes()).unwrap();

        let entries = flatten(&value);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "1");
        assert_eq!(entries[0].path.split('.').count(), depth);

        release(value);
    }

    #[test]
    fn test_parse_unbounded_deep_objects() {
        let depth = 1_000;
        let text = format!("{}null{}", r#"{"k":"#.repeat(depth), "}".repeat(depth));
        let value = parse_unbounded(text.as_bytes()).unwrap();
        let entries = flatten_with_separator(&value, "/");
        assert_eq!(entries[0].path, vec!["k"; depth].join("/"));
        release(value);
    }

    #[test]
    fn test_parse_unbounded_rejects_invalid() {
        assert!(parse_unbounded(b"[1, 2").is_err());
        assert!(parse_unbounded(b"{} trailing").is_err());
        assert_eq!(parse_unbounded(b" [1] ").unwrap(), json!([1]));
    }

    #[test]
    fn test_release_mixed_tree() {
        let mut value = json!({"leaf": 1});
        for i in 0..10_000 {
            value = if i % 2 == 0 {
                Value::Array(vec![value, Value::Null])
            } else {
                let mut map = serde_json::Map::new();
                map.insert("k".to_string(), value);
                Value::Object(map)
            };
        }
        assert_eq!(count_leaves(&value), 5_001);
        release(value);
    }

    #[test]
    fn test_flatten_count_matches_leaves() {
        let value = json!({
            "users": [
                {"name": "a", "roles": ["x", "y"], "meta": {"active": true}},
                {"name": "b", "roles": [], "meta": null}
            ],
            "total": 2
        });
        assert_eq!(flatten(&value).len(), count_leaves(&value));
        assert_eq!(count_leaves(&value), 7);
    }

    #[test]
    fn test_flatten_deterministic() {
        let value = json!({"k": [1, {"x": "y"}], "z": null});
        assert_eq!(flatten(&value), flatten(&value));
    }
}
