//! Redaction of sensitive fields before JSON is rendered.

use serde_json::Value;

use crate::flatten::release;

/// Object keys removed by [`sanitize`], compared case-insensitively.
pub const REDACTED_KEYS: [&str; 3] = ["password", "secret", "token"];

/// Maximum length, in characters, of a string after sanitization.
pub const MAX_STRING_CHARS: usize = 1000;

/// Remove sensitive entries and truncate long strings, in place.
///
/// Object entries whose key matches one of [`REDACTED_KEYS`] are dropped at
/// every depth. Strings longer than [`MAX_STRING_CHARS`] characters are cut
/// to that length. Key order is preserved. The walk uses an explicit stack,
/// so nesting depth is unbounded.
pub fn sanitize(mut value: Value) -> Value {
    let mut removed = Vec::new();
    {
        let mut stack: Vec<&mut Value> = vec![&mut value];
        while let Some(node) = stack.pop() {
            match node {
                Value::Object(map) => {
                    if map.keys().any(|key| is_redacted(key)) {
                        for (key, child) in std::mem::take(map) {
                            if is_redacted(&key) {
                                removed.push(child);
                            } else {
                                map.insert(key, child);
                            }
                        }
                    }
                    stack.extend(map.values_mut());
                }
                Value::Array(items) => stack.extend(items.iter_mut()),
                Value::String(s) => truncate_chars(s, MAX_STRING_CHARS),
                _ => {}
            }
        }
    }

    for child in removed {
        release(child);
    }
    value
}

fn is_redacted(key: &str) -> bool {
    REDACTED_KEYS
        .iter()
        .any(|redacted| key.eq_ignore_ascii_case(redacted))
}

fn truncate_chars(s: &mut String, max: usize) {
    if let Some((byte_index, _)) = s.char_indices().nth(max) {
        s.truncate(byte_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_removes_sensitive_keys() {
        let value = json!({
            "user": "alice",
            "Password": "hunter2",
            "nested": {"TOKEN": "abc", "keep": 1},
            "list": [{"secret": "x", "id": 7}]
        });
        assert_eq!(
            sanitize(value.clone()),
            json!({
                "user": "alice",
                "nested": {"keep": 1},
                "list": [{"id": 7}]
            })
        );
    }

    #[test]
    fn test_sanitize_keeps_similar_keys() {
        let value = json!({"password_hint": "pet", "tokens": 3});
        assert_eq!(sanitize(value.clone()), value);
    }

    #[test]
    fn test_sanitize_truncates_long_strings() {
        let long = "é".repeat(1500);
        let clean = sanitize(json!({"bio": long}));
        let bio = clean["bio"].as_str().unwrap();
        assert_eq!(bio.chars().count(), MAX_STRING_CHARS);
    }

    #[test]
    fn test_sanitize_scalars_untouched() {
        assert_eq!(sanitize(json!(null)), json!(null));
        assert_eq!(sanitize(json!(3.5)), json!(3.5));
        assert_eq!(sanitize(json!("short")), json!("short"));
    }

    #[test]
    fn test_sanitize_keeps_order_after_removal() {
        let value = json!({"a": 1, "token": "t", "b": 2, "c": 3});
        let keys: Vec<String> = sanitize(value)
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sanitize_deep_nesting() {
        let mut value = json!({"secret": "x", "keep": "y"});
        for _ in 0..10_000 {
            value = Value::Array(vec![value]);
        }
        let clean = sanitize(value);

        let entries = crate::flatten::flatten(&clean);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "y");
        assert!(entries[0].path.ends_with(".0.keep"));
        release(clean);
    }
}
