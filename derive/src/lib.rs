//! osjson-derive
//!
//! `#[derive(OSDecodable)]` for the `osjson` crate. Use it through the
//! re-export in `osjson`; the generated code refers to `::osjson`.
//!
//! - Structs with named fields decode from a JSON object, one key per field.
//!   A missing key is read as `null`, so only `Option<_>` fields may be absent
//!   unless marked `#[osjson(default)]`.
//! - Newtype structs decode their field from the same value.
//! - Enums with only unit variants decode from a string naming the variant.
//! - Enums with only single-field tuple variants try each variant in order.
//!
//! Attributes: `#[osjson(rename_all = "camelCase")]` on the container,
//! `#[osjson(rename = "key")]`, `#[osjson(default)]` and `#[osjson(skip)]` on
//! fields, `#[osjson(rename = "name")]` on unit variants.

mod attr;
mod case;
mod expand;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(OSDecodable, attributes(osjson))]
pub fn derive_os_decodable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand::derive_decodable(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
