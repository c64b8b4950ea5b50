//! osjson
//!
//! Failable, type-driven decoding of Rust types from parsed JSON values.
//!
//! - `OSDecodable` trait and `#[derive(OSDecodable)]` (feature `derive`, on by default)
//! - `Json`, a borrowed view over a `serde_json::Value`
//! - `from_str` / `from_slice` / `from_reader` / `from_value`, which parse with
//!   `serde_json` and turn a mismatch into `OsJsonError::Mismatch`
//!
//! ```
//! use osjson::{Json, OSDecodable};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq, OSDecodable)]
//! struct Point {
//!     name: String,
//!     value: f64,
//! }
//!
//! let origin = json!({"name": "origin", "value": 0});
//! let point = Point::from_json(Json::new(&origin)).unwrap();
//! assert_eq!(point.name, "origin");
//! assert_eq!(point.value, 0.0);
//!
//! let wrong = json!({"name": 123, "value": 0});
//! assert_eq!(Point::from_json(Json::new(&wrong)), None);
//! ```

// Lets derived impls inside this crate resolve `::osjson`.
extern crate self as osjson;

pub mod read;

pub use osjson_decode::{
    decode, field, field_or_default, lossy_array, Deserialized, OSDecodable, OsJsonError,
};
pub use osjson_value::{Json, JsonKind, OsJson, JSON};

#[cfg(feature = "derive")]
pub use osjson_derive::OSDecodable;

pub use read::{from_reader, from_slice, from_str, from_value};

pub mod traits {
    pub use osjson_decode::traits::OSDecodable;
}

pub mod error {
    pub use osjson_decode::error::OsJsonError;
}

pub mod value {
    pub use osjson_value::{Json, JsonKind, OsJson, JSON};
}
