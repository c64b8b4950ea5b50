use crate::kind::JsonKind;

use serde_json::Value;
use std::fmt;

static NULL: Value = Value::Null;

/// A borrowed, read-only handle to a parsed JSON value.
///
/// `OsJson` is `Copy` and only holds a reference, so passing it around never
/// clones the underlying document. Accessors return `None` when the value is
/// of a different kind; there are no sentinel defaults.
#[derive(Clone, Copy, PartialEq)]
pub struct OsJson<'a> {
    value: &'a Value,
}

impl<'a> OsJson<'a> {
    pub fn new(value: &'a Value) -> OsJson<'a> {
        OsJson { value }
    }

    /// A view of the JSON `null` literal.
    pub fn null() -> OsJson<'static> {
        OsJson { value: &NULL }
    }

    /// The underlying `serde_json` value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn kind(&self) -> JsonKind {
        JsonKind::of(self.value)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    pub fn is_array(&self) -> bool {
        self.value.is_array()
    }

    /// A convenience method to extract the value out of a JSON boolean.
    /// Returns `None` for other value kinds.
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// A convenience method to extract a JSON number as `i64`.
    /// Returns `None` for other value kinds, for numbers with a fractional
    /// part and for integers that don't fit.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// Like [as_i64](#method.as_i64) but for non-negative integers up to
    /// `u64::MAX`.
    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_u64()
    }

    /// A convenience method to extract any JSON number as `f64`.
    /// Returns `None` for other value kinds.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// A convenience method to extract the value out of a JSON string.
    /// Returns `None` for other value kinds.
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// The number of elements of an array or entries of an object.
    /// Returns `None` for other value kinds.
    pub fn len(&self) -> Option<usize> {
        match self.value {
            Value::Array(values) => Some(values.len()),
            Value::Object(fields) => Some(fields.len()),
            _ => None,
        }
    }

    /// A convenience method to extract a field out of a JSON object.
    /// Returns `None` for other value kinds or if the field isn't present.
    pub fn get(&self, key: &str) -> Option<OsJson<'a>> {
        match self.value {
            Value::Object(fields) => fields.get(key).map(OsJson::new),
            _ => None,
        }
    }

    /// Like [get](#method.get), but a missing field (or a non-object
    /// receiver) is viewed as `null`.
    pub fn get_or_null(&self, key: &str) -> OsJson<'a> {
        self.get(key).unwrap_or(OsJson::null())
    }

    /// A convenience method to extract an element out of a JSON array.
    /// Returns `None` for other value kinds or if `index` is out of bounds.
    pub fn at(&self, index: usize) -> Option<OsJson<'a>> {
        match self.value {
            Value::Array(values) => values.get(index).map(OsJson::new),
            _ => None,
        }
    }

    /// Looks up a value by RFC 6901 JSON pointer, e.g. `/points/0/name`.
    pub fn pointer(&self, pointer: &str) -> Option<OsJson<'a>> {
        self.value.pointer(pointer).map(OsJson::new)
    }

    /// Iterates over the elements of a JSON array.
    /// Returns `None` for other value kinds.
    pub fn elements(&self) -> Option<impl Iterator<Item = OsJson<'a>> + 'a> {
        match self.value {
            Value::Array(values) => Some(values.iter().map(OsJson::new)),
            _ => None,
        }
    }

    /// Iterates over the entries of a JSON object, in the map's order.
    /// Returns `None` for other value kinds.
    pub fn entries(&self) -> Option<impl Iterator<Item = (&'a str, OsJson<'a>)> + 'a> {
        match self.value {
            Value::Object(fields) => Some(
                fields
                    .iter()
                    .map(|(key, value)| (key.as_str(), OsJson::new(value))),
            ),
            _ => None,
        }
    }

    pub fn json_for_key(&self, key: &str) -> Option<OsJson<'a>> {
        self.get(key)
    }

    pub fn bool_for_key(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn i64_for_key(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    pub fn f64_for_key(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn str_for_key(&self, key: &str) -> Option<&'a str> {
        self.get(key)?.as_str()
    }

    pub fn array_for_key(&self, key: &str) -> Option<impl Iterator<Item = OsJson<'a>> + 'a> {
        self.get(key)?.elements()
    }
}

impl<'a> From<&'a Value> for OsJson<'a> {
    fn from(value: &'a Value) -> OsJson<'a> {
        OsJson::new(value)
    }
}

impl<'a> fmt::Debug for OsJson<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OsJson({})", self.value)
    }
}

impl<'a> fmt::Display for OsJson<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}
