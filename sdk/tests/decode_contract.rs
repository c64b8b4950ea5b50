#![cfg(test)]

use osjson::{field, from_str, from_value, Json, OSDecodable, JSON};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::thread;

/// A hand-written conformance, without the derive macro.
#[derive(Debug, Clone, PartialEq)]
struct NamedPoint {
    name:  String,
    value: f64,
}

impl OSDecodable for NamedPoint {
    fn from_json(json: Json<'_>) -> Option<Self> {
        if !json.is_object() {
            return None;
        }
        Some(NamedPoint {
            name:  field(json, "name")?,
            value: field(json, "value")?,
        })
    }
}

/// A type with its own range invariant on top of field presence.
#[derive(Debug, PartialEq)]
struct Percentage(f64);

impl OSDecodable for Percentage {
    fn from_json(json: Json<'_>) -> Option<Self> {
        let value = json.as_f64()?;
        (0.0..=100.0).contains(&value).then_some(Percentage(value))
    }
}

fn decode<T: OSDecodable>(value: &Value) -> Option<T> {
    T::from_json(Json::new(value))
}

#[test]
fn test_matching_object_decodes() {
    let point = decode::<NamedPoint>(&json!({"name": "origin", "value": 0})).unwrap();
    assert_eq!(point.name, "origin");
    assert_eq!(point.value, 0.0);
}

#[test]
fn test_missing_field_is_mismatch() {
    assert_eq!(decode::<NamedPoint>(&json!({"name": "origin"})), None);
    assert_eq!(decode::<NamedPoint>(&json!({"value": 0})), None);
    assert_eq!(decode::<NamedPoint>(&json!({})), None);
}

#[test]
fn test_wrong_field_type_is_mismatch() {
    assert_eq!(decode::<NamedPoint>(&json!({"name": 123, "value": 0})), None);
    assert_eq!(decode::<NamedPoint>(&json!({"name": "origin", "value": "0"})), None);
    assert_eq!(decode::<NamedPoint>(&json!({"name": null, "value": 0})), None);
}

#[test]
fn test_wrong_shape_is_mismatch() {
    assert_eq!(decode::<NamedPoint>(&json!(null)), None);
    assert_eq!(decode::<NamedPoint>(&json!(["origin", 0])), None);
    assert_eq!(decode::<NamedPoint>(&json!("origin")), None);
}

#[test]
fn test_extra_fields_are_ignored() {
    let point = decode::<NamedPoint>(&json!({"name": "a", "value": 2.5, "unit": "m"})).unwrap();
    assert_eq!(point, NamedPoint { name: "a".to_owned(), value: 2.5 });
}

#[test]
fn test_success_implies_validity() {
    assert_eq!(decode::<Percentage>(&json!(42.5)), Some(Percentage(42.5)));
    assert_eq!(decode::<Percentage>(&json!(100.5)), None);
    assert_eq!(decode::<Percentage>(&json!(-1)), None);
}

#[test]
fn test_null_only_where_modelled() {
    let null = json!(null);
    assert_eq!(decode::<NamedPoint>(&null), None);
    assert_eq!(decode::<String>(&null), None);
    assert_eq!(decode::<f64>(&null), None);
    assert_eq!(decode::<Vec<NamedPoint>>(&null), None);
    assert_eq!(decode::<Option<NamedPoint>>(&null), Some(None));
}

#[test]
fn test_trying_candidate_types() {
    let inputs = [json!({"name": "p", "value": 1}), json!(55), json!("neither")];

    let described: Vec<&str> = inputs
        .iter()
        .map(|input| {
            if decode::<NamedPoint>(input).is_some() {
                "point"
            } else if decode::<Percentage>(input).is_some() {
                "percentage"
            } else {
                "unknown"
            }
        })
        .collect();

    assert_eq!(described, ["point", "percentage", "unknown"]);
}

#[test]
fn test_input_is_not_mutated() {
    let doc = json!({"name": "origin", "value": 0, "extra": [1, 2]});
    let before = doc.clone();
    let _ = decode::<NamedPoint>(&doc);
    let _ = decode::<Vec<u8>>(&doc);
    assert_eq!(doc, before);
}

#[test]
fn test_from_value_wraps_mismatch() {
    let err = from_value::<NamedPoint>(&json!({"name": "origin"})).unwrap_err();
    assert!(err.is_mismatch());
    assert!(err.to_string().contains("NamedPoint"));
}

#[test]
fn test_integral_floats_are_integers() {
    assert_eq!(from_str::<i64>("1e3").unwrap(), 1000);
    assert_eq!(from_str::<u32>("1.0").unwrap(), 1);
    assert!(from_str::<u32>("1.5").unwrap_err().is_mismatch());
    assert_eq!(decode::<i32>(&json!(2.0)), Some(2));
}

#[test]
fn test_upper_case_alias_is_the_same_view() {
    let doc = json!({"name": "origin", "value": 0});
    let upper: JSON<'_> = JSON::new(&doc);
    let lower: Json<'_> = upper;
    assert_eq!(NamedPoint::from_json(upper), NamedPoint::from_json(lower));
    assert!(NamedPoint::from_json(upper).is_some());
}

#[test]
fn test_concurrent_decodes_agree() {
    let doc = json!({"points": [
        {"name": "a", "value": 1},
        {"name": "b", "value": 2},
        {"name": "c"}
    ]});
    let json = Json::new(&doc);

    let results: Vec<Option<Vec<NamedPoint>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || osjson::lossy_array(json.get_or_null("points"))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(results[0].as_ref().map(Vec::len), Some(2));
}

proptest! {
    #[test]
    fn prop_decode_reflects_input(name in ".*", value in -1.0e12f64..1.0e12f64) {
        let doc = json!({"name": name.clone(), "value": value});
        let point = decode::<NamedPoint>(&doc);
        prop_assert_eq!(point, Some(NamedPoint { name, value }));
    }

    #[test]
    fn prop_decode_is_idempotent(name in proptest::option::of(".*"), value in proptest::option::of(any::<i64>())) {
        let mut doc = serde_json::Map::new();
        if let Some(name) = name {
            doc.insert("name".to_owned(), json!(name));
        }
        if let Some(value) = value {
            doc.insert("value".to_owned(), json!(value));
        }
        let doc = Value::Object(doc);

        let first = decode::<NamedPoint>(&doc);
        let second = decode::<NamedPoint>(&doc);
        prop_assert_eq!(first.clone(), second);
        prop_assert_eq!(first.is_some(), doc.get("name").is_some() && doc.get("value").is_some());
    }
}
