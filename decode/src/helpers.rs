use crate::traits::OSDecodable;

use osjson_value::Json;
use std::any::type_name;
use tracing::debug;

/// Generic entry point, equivalent to `T::from_json(json)`.
pub fn decode<T: OSDecodable>(json: Json<'_>) -> Option<T> {
    T::from_json(json)
}

/// Decodes the value stored under `key`.
///
/// A missing key is treated as `null`, so `Option<T>` fields accept both an
/// absent key and an explicit `null`, while required fields fail. Calling
/// this on something other than an object also sees `null`; check
/// `json.is_object()` first when the shape matters.
pub fn field<T: OSDecodable>(json: Json<'_>, key: &str) -> Option<T> {
    T::from_json(json.get_or_null(key))
}

/// Decodes the value stored under `key`, or returns `T::default()` when the
/// key is absent. A present value that does not decode is still a mismatch.
pub fn field_or_default<T: OSDecodable + Default>(json: Json<'_>, key: &str) -> Option<T> {
    match json.get(key) {
        Some(value) => T::from_json(value),
        None => Some(T::default()),
    }
}

/// Decodes every element of an array that matches `T`, dropping the rest.
///
/// Returns `None` only when `json` is not an array. Use `Vec<T>` instead when
/// a single bad element should reject the whole array.
pub fn lossy_array<T: OSDecodable>(json: Json<'_>) -> Option<Vec<T>> {
    let elements = json.elements()?;
    let mut skipped = 0usize;

    let decoded: Vec<T> = elements
        .filter_map(|element| {
            let value = T::from_json(element);
            if value.is_none() {
                skipped += 1;
            }
            value
        })
        .collect();

    if skipped > 0 {
        debug!(
            target_type = type_name::<T>(),
            skipped,
            kept = decoded.len(),
            "dropped array elements that did not decode"
        );
    }

    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_missing_key_is_null() {
        let doc = json!({"a": 1, "b": null});
        let json = Json::new(&doc);

        assert_eq!(field::<i32>(json, "a"), Some(1));
        assert_eq!(field::<i32>(json, "missing"), None);
        assert_eq!(field::<Option<i32>>(json, "missing"), Some(None));
        assert_eq!(field::<Option<i32>>(json, "b"), Some(None));
        assert_eq!(field::<Option<i32>>(json, "a"), Some(Some(1)));
    }

    #[test]
    fn field_or_default_only_covers_absence() {
        let doc = json!({"count": 3, "bad": "x"});
        let json = Json::new(&doc);

        assert_eq!(field_or_default::<u32>(json, "count"), Some(3));
        assert_eq!(field_or_default::<u32>(json, "missing"), Some(0));
        assert_eq!(field_or_default::<u32>(json, "bad"), None);
        assert_eq!(field_or_default::<Vec<u32>>(json, "missing"), Some(vec![]));
    }

    #[test]
    fn lossy_array_skips_mismatches() {
        let doc = json!([1, "two", 3, null, 4.5]);
        let json = Json::new(&doc);

        assert_eq!(lossy_array::<i32>(json), Some(vec![1, 3]));
        assert_eq!(decode::<Vec<i32>>(json), None);

        let scalar = json!("not an array");
        assert_eq!(lossy_array::<i32>(Json::new(&scalar)), None);

        let empty = json!([]);
        assert_eq!(lossy_array::<i32>(Json::new(&empty)), Some(vec![]));
    }
}
