use crate::traits::OSDecodable;

use osjson_value::Json;
use serde::de::DeserializeOwned;

/// Decodes any `serde` deserializable type through the `OSDecodable`
/// contract. Deserialization errors are reported as a mismatch.
///
/// ```
/// use osjson_decode::{Deserialized, Json, OSDecodable};
/// use serde_json::json;
///
/// let doc = json!([1, 2, 3]);
/// let Deserialized(sum_me) = Deserialized::<[u8; 3]>::from_json(Json::new(&doc)).unwrap();
/// assert_eq!(sum_me.iter().sum::<u8>(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deserialized<T>(pub T);

impl<T> Deserialized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> OSDecodable for Deserialized<T> {
    fn from_json(json: Json<'_>) -> Option<Self> {
        T::deserialize(json.value()).ok().map(Deserialized)
    }
}
