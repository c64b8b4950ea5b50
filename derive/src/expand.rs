use crate::attr::{ContainerAttrs, FieldAttrs, VariantAttrs};

use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    parse_quote, Data, DataEnum, DeriveInput, Fields, FieldsNamed, FieldsUnnamed, GenericParam,
    Generics, LitStr, Result,
};

pub fn derive_decodable(input: DeriveInput) -> Result<TokenStream> {
    let container = ContainerAttrs::from_attrs(&input.attrs)?;

    let body = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => named_struct_body(fields, &container)?,
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                reject_rename_all(&container, "a newtype struct")?;
                newtype_struct_body(fields)?
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "OSDecodable can only be derived for structs with named fields or a single unnamed field",
                ))
            }
        },
        Data::Enum(data) => enum_body(data, &container)?,
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "OSDecodable cannot be derived for unions",
            ))
        }
    };

    let name = &input.ident;
    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::osjson::OSDecodable for #name #ty_generics #where_clause {
            fn from_json(json: ::osjson::Json<'_>) -> ::core::option::Option<Self> {
                #body
            }
        }
    })
}

/// Every type parameter must itself be decodable.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::osjson::OSDecodable));
        }
    }
    generics
}

/// The JSON key for a field or unit variant: an explicit rename wins, then
/// the container's rename rule, then the identifier itself.
fn json_key(ident: &syn::Ident, rename: Option<String>, container: &ContainerAttrs) -> String {
    let bare = ident.unraw().to_string();
    match (rename, container.rename_all) {
        (Some(key), _) => key,
        (None, Some((rule, _))) => rule.apply(&bare),
        (None, None) => bare,
    }
}

/// `rename_all` only applies to object keys and variant names.
fn reject_rename_all(container: &ContainerAttrs, target: &str) -> Result<()> {
    match container.rename_all {
        Some((_, span)) => Err(syn::Error::new(
            span,
            format!("rename_all has no effect on {}", target),
        )),
        None => Ok(()),
    }
}

fn named_struct_body(fields: &FieldsNamed, container: &ContainerAttrs) -> Result<TokenStream> {
    let mut inits = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let attrs = FieldAttrs::from_attrs(&field.attrs)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
        let ty = &field.ty;

        let init = if attrs.skip {
            quote! { ::core::default::Default::default() }
        } else {
            let key = json_key(ident, attrs.rename, container);
            if attrs.default {
                quote! { ::osjson::field_or_default::<#ty>(json, #key)? }
            } else {
                quote! { ::osjson::field::<#ty>(json, #key)? }
            }
        };
        inits.push(quote! { #ident: #init });
    }

    Ok(quote! {
        if !json.is_object() {
            return ::core::option::Option::None;
        }
        ::core::option::Option::Some(Self {
            #(#inits,)*
        })
    })
}

fn newtype_struct_body(fields: &FieldsUnnamed) -> Result<TokenStream> {
    let field = &fields.unnamed[0];
    let attrs = FieldAttrs::from_attrs(&field.attrs)?;
    if attrs.rename.is_some() || attrs.default || attrs.skip {
        return Err(syn::Error::new(
            field.span(),
            "osjson field attributes have no effect on a newtype struct",
        ));
    }
    let ty = &field.ty;
    Ok(quote! {
        <#ty as ::osjson::OSDecodable>::from_json(json).map(|inner| Self(inner))
    })
}

fn enum_body(data: &DataEnum, container: &ContainerAttrs) -> Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! {
            let _ = json;
            ::core::option::Option::None
        });
    }

    let all_unit = data.variants.iter().all(|v| matches!(v.fields, Fields::Unit));
    let all_newtype = data
        .variants
        .iter()
        .all(|v| matches!(&v.fields, Fields::Unnamed(f) if f.unnamed.len() == 1));

    if all_unit {
        unit_enum_body(data, container)
    } else if all_newtype {
        reject_rename_all(container, "an enum whose variants wrap values")?;
        untagged_enum_body(data)
    } else {
        Err(syn::Error::new(
            data.enum_token.span,
            "OSDecodable enums must have only unit variants (decoded from strings) \
             or only single-field tuple variants (tried in order)",
        ))
    }
}

fn unit_enum_body(data: &DataEnum, container: &ContainerAttrs) -> Result<TokenStream> {
    let mut arms = Vec::with_capacity(data.variants.len());
    let mut seen = HashSet::new();

    for variant in &data.variants {
        let attrs = VariantAttrs::from_attrs(&variant.attrs)?;
        let ident = &variant.ident;
        let key = json_key(ident, attrs.rename.map(|lit: LitStr| lit.value()), container);
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate JSON name \"{}\"", key),
            ));
        }
        arms.push(quote! {
            #key => ::core::option::Option::Some(Self::#ident),
        });
    }

    Ok(quote! {
        match json.as_str()? {
            #(#arms)*
            _ => ::core::option::Option::None,
        }
    })
}

fn untagged_enum_body(data: &DataEnum) -> Result<TokenStream> {
    let mut attempts = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let attrs = VariantAttrs::from_attrs(&variant.attrs)?;
        if let Some(rename) = attrs.rename {
            return Err(syn::Error::new(
                rename.span(),
                "rename has no effect on a variant that wraps a value",
            ));
        }
        let ident = &variant.ident;
        let ty = match &variant.fields {
            Fields::Unnamed(fields) => &fields.unnamed[0].ty,
            _ => return Err(syn::Error::new(variant.span(), "expected a single-field variant")),
        };
        attempts.push(quote! {
            if let ::core::option::Option::Some(value) =
                <#ty as ::osjson::OSDecodable>::from_json(json)
            {
                return ::core::option::Option::Some(Self::#ident(value));
            }
        });
    }

    Ok(quote! {
        #(#attempts)*
        ::core::option::Option::None
    })
}
