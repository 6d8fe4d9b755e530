//! Recursive merge of JSON documents.
//!
//! Objects merge key by key, arrays concatenate (target first), and any
//! other combination is replaced by the source value.

use serde_json::Value;

/// Merge `source` into `target`.
///
/// ## Example
///
/// ```
/// use ccg_versions::merge::deep_merge;
/// use serde_json::json;
///
/// let mut target = json!({"a": {"x": 1, "tags": ["t1"]}, "b": 1});
/// deep_merge(&mut target, json!({"a": {"y": 2, "tags": ["t2"]}, "b": 2}));
///
/// assert_eq!(target, json!({"a": {"x": 1, "y": 2, "tags": ["t1", "t2"]}, "b": 2}));
/// ```
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (target, source) => *target = source,
    }
}
