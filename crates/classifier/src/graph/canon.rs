//! Canonical JSON serialization for graph hashing
//!
//! Object keys are sorted recursively and no whitespace is emitted, so two
//! semantically equal graphs hash identically regardless of key order in the
//! file they were read from.

use serde::Serialize;
use std::collections::BTreeMap;

/// Serialize a value to canonical JSON (sorted keys, no whitespace)
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json_value = serde_json::to_value(value)?;
    let canonical = canonicalize_value(&json_value);
    serde_json::to_string(&canonical)
}

fn canonicalize_value(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut btree = BTreeMap::new();
            for (k, v) in map {
                btree.insert(k.clone(), canonicalize_value(v));
            }
            serde_json::Value::Object(btree.into_iter().collect())
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(canonicalize_value).collect())
        }
        other => other.clone(),
    }
}

/// Blake3 hash of the canonical JSON form, hex encoded
pub fn hash_canonical_hex<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = to_canonical_json(value)?;
    Ok(hex::encode(blake3::hash(json.as_bytes()).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_sorted_recursively() {
        let value = json!({"zeta": 1, "alpha": {"y": 2, "b": [{"k": 1, "a": 0}]}});
        let canonical = to_canonical_json(&value).unwrap();
        assert_eq!(canonical, r#"{"alpha":{"b":[{"a":0,"k":1}],"y":2},"zeta":1}"#);
    }

    #[test]
    fn test_hash_ignores_key_order() {
        let a = json!({"input": 1, "output": 2});
        let b: serde_json::Value = serde_json::from_str(r#"{"output":2,"input":1}"#).unwrap();
        let hash = hash_canonical_hex(&a).unwrap();
        assert_eq!(hash, hash_canonical_hex(&b).unwrap());
        assert_eq!(hash.len(), 64);
    }
}
