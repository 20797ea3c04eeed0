//! Derive macro implementation used by `natu-core`.
//!
//! `natu-derive` is an implementation detail of this workspace. The
//! `BaseDimension` derive expands in terms of `crate::BaseDimension`, so it is
//! intended to be used by `natu-core` (or by crates that expose an identical
//! crate-root API). Downstream crates should declare axes with the
//! `base_dimension!` macro from `natu-core` instead.
//!
//! # Generated impls
//!
//! For an axis marker type `MyAxis`, the derive implements:
//!
//! - `crate::BaseDimension for MyAxis`
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `key = 3`: the canonicalization key, a non-negative integer unique per
//!   axis, mapped to the corresponding `typenum` unsigned type.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitInt, Token,
};

/// Derive `crate::BaseDimension` for an axis marker type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing
/// the `key`.
///
/// This macro is intended for use by `natu-core`.
#[proc_macro_derive(BaseDimension, attributes(dimension))]
pub fn derive_base_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_base_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_base_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[dimension(...)] attribute
    let dim_attr = parse_dimension_attribute(&input.attrs)?;

    let key: u128 = dim_attr.key.base10_parse()?;
    let key_type = format_ident!("U{}", key);

    let expanded = quote! {
        impl crate::BaseDimension for #name {
            type Key = ::typenum::consts::#key_type;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    key: LitInt,
    // Future extensions:
    // name: Option<LitStr>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut key: Option<LitInt> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "key" => {
                    key = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let key =
            key.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `key`"))?;

        Ok(DimensionAttribute { key })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_dimension_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[dimension(key = 0)]
            pub enum Length {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.key.base10_parse::<u128>().unwrap(), 0);
    }

    #[test]
    fn test_parse_dimension_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn test_parse_dimension_attribute_missing_key() {
        let input: DeriveInput = parse_quote! {
            #[dimension()]
            pub enum Length {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `key`"));
    }

    #[test]
    fn test_parse_dimension_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[dimension(key = 0, unknown = "value")]
            pub enum Length {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[dimension(key = 7)]
            pub enum Charge {}
        };

        let result = derive_base_dimension_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: BaseDimension for Charge"));
        assert!(code.contains("type Key = :: typenum :: consts :: U7"));
    }

    #[test]
    fn test_derive_impl_large_key() {
        let input: DeriveInput = parse_quote! {
            #[dimension(key = 100)]
            pub enum Custom {}
        };

        let result = derive_base_dimension_impl(input);
        assert!(result.is_ok());
        let code = result.unwrap().to_string();
        assert!(code.contains("U100"));
    }

    #[test]
    fn test_dimension_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            key = 2,
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.key.base10_parse::<u128>().unwrap(), 2);
    }

    #[test]
    fn test_dimension_attribute_parse_duplicate_key() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            key = 1, key = 4
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.key.base10_parse::<u128>().unwrap(), 4);
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<DimensionAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };
        let result = derive_base_dimension_impl(input);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_tokens = err.to_compile_error();
        let code = err_tokens.to_string();
        assert!(code.contains("compile_error"));
    }
}
