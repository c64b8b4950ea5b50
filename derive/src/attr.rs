use crate::case::RenameRule;

use proc_macro2::Span;
use syn::{Attribute, LitStr, Result};

#[derive(Default)]
pub struct ContainerAttrs {
    /// The rule and the span of its string literal.
    pub rename_all: Option<(RenameRule, Span)>,
}

#[derive(Default)]
pub struct FieldAttrs {
    pub rename:  Option<String>,
    pub default: bool,
    pub skip:    bool,
}

#[derive(Default)]
pub struct VariantAttrs {
    pub rename: Option<LitStr>,
}

fn osjson_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("osjson"))
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
        let mut out = ContainerAttrs::default();
        for attr in osjson_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    match RenameRule::parse(&lit.value()) {
                        Some(rule) => out.rename_all = Some((rule, lit.span())),
                        None => {
                            return Err(syn::Error::new(
                                lit.span(),
                                format!(
                                    "unknown rename_all rule, expected one of: {}",
                                    RenameRule::NAMES.join(", ")
                                ),
                            ))
                        }
                    }
                    Ok(())
                } else {
                    Err(meta.error("unsupported osjson container attribute"))
                }
            })?;
        }
        Ok(out)
    }
}

impl FieldAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
        let mut out = FieldAttrs::default();
        for attr in osjson_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("default") {
                    out.default = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported osjson field attribute"))
                }
            })?;
        }
        Ok(out)
    }
}

impl VariantAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<VariantAttrs> {
        let mut out = VariantAttrs::default();
        for attr in osjson_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported osjson variant attribute"))
                }
            })?;
        }
        Ok(out)
    }
}
