//! A small read-only view over JSON documents parsed by `serde_json`.
//!
//! The decoding contract in `osjson-decode` never touches `serde_json::Value`
//! directly. It receives an [OsJson] (aliased [Json]), a `Copy` handle that
//! borrows the caller's value and exposes `Option`-returning accessors.
//!
//! ```
//! use osjson_value::{Json, JsonKind};
//! use serde_json::json;
//!
//! let doc = json!({"name": "origin", "value": 0, "tags": ["a", "b"]});
//! let json = Json::new(&doc);
//!
//! assert_eq!(json.kind(), JsonKind::Object);
//! assert_eq!(json.str_for_key("name"), Some("origin"));
//! assert_eq!(json.i64_for_key("value"), Some(0));
//! assert_eq!(json.str_for_key("value"), None);
//! assert_eq!(json.array_for_key("tags").map(|tags| tags.count()), Some(2));
//! assert!(json.get_or_null("missing").is_null());
//! ```

pub mod kind;
pub mod view;

pub use kind::JsonKind;
pub use view::OsJson;

/// Shorthand alias for [OsJson].
pub type Json<'a> = OsJson<'a>;

/// The same alias, under the upper-case name the contract was first written with.
#[allow(clippy::upper_case_acronyms)]
pub type JSON<'a> = OsJson<'a>;
