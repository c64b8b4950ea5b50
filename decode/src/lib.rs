//! osjson-decode
//!
//! This crate implements:
//!  1) The `OSDecodable` contract (failable construction from a JSON value),
//!  2) Conformances for standard library scalars, collections and pointers,
//!  3) Field and array helpers used by hand-written and derived impls,
//!  4) A `serde` bridge (`Deserialized<T>`), and
//!  5) The error type (`OsJsonError`) of the `Result`-returning entry points.

pub mod bridge;
pub mod error;
pub mod helpers;
pub mod impls;
pub mod traits;

pub use bridge::Deserialized;
pub use error::OsJsonError;
pub use helpers::{decode, field, field_or_default, lossy_array};
pub use traits::OSDecodable;

pub use osjson_value::{Json, JsonKind, OsJson, JSON};
