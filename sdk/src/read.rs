use osjson_decode::{OSDecodable, OsJsonError};
use osjson_value::Json;

use serde_json::Value;
use std::any::type_name;
use std::io::Read;
use tracing::debug;

/// Decode an already parsed value, reporting a mismatch as an error.
pub fn from_value<T: OSDecodable>(value: &Value) -> Result<T, OsJsonError> {
    let json = Json::new(value);
    T::from_json(json).ok_or_else(|| mismatch::<T>(json))
}

/// Parse `text` with `serde_json`, then decode it as `T`.
pub fn from_str<T: OSDecodable>(text: &str) -> Result<T, OsJsonError> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Parse UTF-8 JSON bytes with `serde_json`, then decode them as `T`.
pub fn from_slice<T: OSDecodable>(bytes: &[u8]) -> Result<T, OsJsonError> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value)
}

/// Read `reader` to the end, then behave like [from_slice].
pub fn from_reader<T: OSDecodable, R: Read>(mut reader: R) -> Result<T, OsJsonError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

fn mismatch<T>(json: Json<'_>) -> OsJsonError {
    let type_name = type_name::<T>();
    let found = json.kind();
    debug!(target_type = type_name, %found, "JSON value did not decode");
    OsJsonError::Mismatch { type_name, found }
}
