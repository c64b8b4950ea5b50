use osjson_value::Json;

/// Represents an entity that can be decoded from a JSON value.
///
/// Decoding is all-or-nothing: an implementation returns `Some` only with a
/// fully initialised, valid instance, and `None` whenever the JSON does not
/// describe one (wrong kind, missing or mistyped field, out-of-range number).
/// A mismatch is an ordinary outcome, not an error, so callers can cheaply
/// try several candidate types against the same value.
///
/// Implementations must not panic, mutate global state, or hold on to
/// `json` after returning. Calling `from_json` twice with the same value
/// gives equal results.
///
/// `null` decodes to `None` unless the type models null explicitly, as
/// `Option<T>` and `()` do.
///
/// ```
/// use osjson_decode::{field, Json, OSDecodable};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     name: String,
///     value: f64,
/// }
///
/// impl OSDecodable for Point {
///     fn from_json(json: Json<'_>) -> Option<Self> {
///         if !json.is_object() {
///             return None;
///         }
///         Some(Point {
///             name: field(json, "name")?,
///             value: field(json, "value")?,
///         })
///     }
/// }
///
/// let origin = json!({"name": "origin", "value": 0});
/// assert_eq!(
///     Point::from_json(Json::new(&origin)),
///     Some(Point { name: "origin".to_owned(), value: 0.0 })
/// );
///
/// let partial = json!({"name": "origin"});
/// assert_eq!(Point::from_json(Json::new(&partial)), None);
/// ```
pub trait OSDecodable: Sized {
    /// Attempts to build `Self` from `json`, returning `None` on mismatch.
    fn from_json(json: Json<'_>) -> Option<Self>;
}
