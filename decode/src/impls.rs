//! `OSDecodable` for standard library types.
//!
//! Scalars never coerce across JSON kinds: a `"1"` string is not an integer
//! and `0` is not `false`. Containers are strict; one bad element fails the
//! whole container (see [lossy_array](crate::lossy_array) for the lenient
//! variant).

use crate::traits::OSDecodable;

use osjson_value::Json;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

impl OSDecodable for bool {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.as_bool()
    }
}

/// An integral JSON number stored as a float (`1.0`, `1e3`), if it lies in
/// `[min, max_exclusive)`.
fn integral_float(json: Json<'_>, min: f64, max_exclusive: f64) -> Option<f64> {
    let value = json.as_f64()?;
    (value.fract() == 0.0 && value >= min && value < max_exclusive).then_some(value)
}

// `MAX as f64 + 1.0` is exact for every bound below: either the sum is exact
// or `MAX as f64` has already rounded up to the next power of two.
macro_rules! decode_signed {
    ($($ty:ty),*) => {$(
        impl OSDecodable for $ty {
            fn from_json(json: Json<'_>) -> Option<Self> {
                match json.as_i64() {
                    Some(value) => <$ty>::try_from(value).ok(),
                    None => integral_float(json, <$ty>::MIN as f64, <$ty>::MAX as f64 + 1.0)
                        .map(|value| value as $ty),
                }
            }
        }
    )*};
}

macro_rules! decode_unsigned {
    ($($ty:ty),*) => {$(
        impl OSDecodable for $ty {
            fn from_json(json: Json<'_>) -> Option<Self> {
                match json.as_u64() {
                    Some(value) => <$ty>::try_from(value).ok(),
                    None => integral_float(json, 0.0, <$ty>::MAX as f64 + 1.0)
                        .map(|value| value as $ty),
                }
            }
        }
    )*};
}

decode_signed!(i8, i16, i32, i64, isize);
decode_unsigned!(u8, u16, u32, u64, usize);

impl OSDecodable for f64 {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.as_f64()
    }
}

impl OSDecodable for f32 {
    fn from_json(json: Json<'_>) -> Option<Self> {
        let value = json.as_f64()?;
        if value.is_finite() && value.abs() <= f32::MAX as f64 {
            Some(value as f32)
        } else {
            None
        }
    }
}

impl OSDecodable for String {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.as_str().map(str::to_owned)
    }
}

impl OSDecodable for char {
    fn from_json(json: Json<'_>) -> Option<Self> {
        let mut chars = json.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl OSDecodable for () {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.is_null().then_some(())
    }
}

/// `null` is a valid `Option<T>`, so it decodes to `Some(None)`.
impl<T: OSDecodable> OSDecodable for Option<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        if json.is_null() {
            Some(None)
        } else {
            T::from_json(json).map(Some)
        }
    }
}

impl<T: OSDecodable> OSDecodable for Vec<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.elements()?.map(T::from_json).collect()
    }
}

impl<T: OSDecodable> OSDecodable for VecDeque<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.elements()?.map(T::from_json).collect()
    }
}

impl<T: OSDecodable + Ord> OSDecodable for BTreeSet<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.elements()?.map(T::from_json).collect()
    }
}

impl<T, S> OSDecodable for HashSet<T, S>
where
    T: OSDecodable + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.elements()?.map(T::from_json).collect()
    }
}

impl<T, S> OSDecodable for HashMap<String, T, S>
where
    T: OSDecodable,
    S: BuildHasher + Default,
{
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.entries()?
            .map(|(key, value)| T::from_json(value).map(|value| (key.to_owned(), value)))
            .collect()
    }
}

impl<T: OSDecodable> OSDecodable for BTreeMap<String, T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        json.entries()?
            .map(|(key, value)| T::from_json(value).map(|value| (key.to_owned(), value)))
            .collect()
    }
}

impl<T: OSDecodable> OSDecodable for Box<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        T::from_json(json).map(Box::new)
    }
}

impl<T: OSDecodable> OSDecodable for Rc<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        T::from_json(json).map(Rc::new)
    }
}

impl<T: OSDecodable> OSDecodable for Arc<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        T::from_json(json).map(Arc::new)
    }
}

/// Any JSON value, `null` included, is a valid `serde_json::Value`.
impl OSDecodable for Value {
    fn from_json(json: Json<'_>) -> Option<Self> {
        Some(json.value().clone())
    }
}
