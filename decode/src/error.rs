use osjson_value::JsonKind;
use thiserror::Error;

/// Failures of the parse-then-decode entry points.
///
/// `OSDecodable::from_json` itself never produces this type; a mismatch there
/// is just `None`. `Mismatch` is what that `None` becomes once a caller asks
/// for a `Result`.
#[derive(Debug, Error)]
pub enum OsJsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("JSON {found} does not decode as `{type_name}`")]
    Mismatch {
        type_name: &'static str,
        found:     JsonKind,
    },
}

impl OsJsonError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, OsJsonError::Mismatch { .. })
    }
}
