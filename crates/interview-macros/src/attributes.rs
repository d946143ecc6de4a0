//! Attribute parsing using darling.
//!
//! This module provides types for parsing the `#[shape(...)]` field
//! attribute used by the derive macro.

use darling::{FromDeriveInput, FromField, FromMeta, ast};
use proc_macro2::Span;
use syn::{Attribute, Ident, Member};

/// Parsed input for the Shape derive macro.
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_any))]
pub struct ShapeInput {
    /// The struct identifier (name).
    pub ident: Ident,

    /// Generics from the struct definition.
    pub generics: syn::Generics,

    /// The parsed fields of the struct.
    pub data: ast::Data<(), ShapeField>,
}

/// Arguments of the `#[shape(...)]` field attribute.
///
/// ```rust,ignore
/// #[derive(Shape)]
/// struct Pair {
///     #[shape(rename = "A")]  // shown as `A: ...` with field names on
///     a: i32,
///
///     #[shape(skip)]          // hidden from copy, format and diff
///     cache: Vec<u8>,
/// }
/// ```
#[derive(Debug, Default, Clone, FromMeta)]
pub struct ShapeFieldArgs {
    /// Display name used instead of the field name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Hide the field from the engine.
    #[darling(default)]
    pub skip: bool,
}

/// A single field in the struct.
#[derive(Debug, FromField)]
#[darling(forward_attrs(shape))]
pub struct ShapeField {
    /// The field identifier; `None` for tuple struct fields.
    pub ident: Option<Ident>,

    /// The field type.
    pub ty: syn::Type,

    /// Forwarded `#[shape]` attributes.
    pub attrs: Vec<Attribute>,
}

impl ShapeField {
    /// Parses the `#[shape(...)]` arguments, defaulting when absent.
    pub fn args(&self) -> Result<ShapeFieldArgs, AttributeError> {
        match self.attrs.iter().find(|attr| attr.path().is_ident("shape")) {
            Some(attr) => parse_attribute_args::<ShapeFieldArgs>(attr),
            None => Ok(ShapeFieldArgs::default()),
        }
    }

    /// Access path of the field at `index` (`name` or `0`).
    pub fn member(&self, index: usize) -> Member {
        match &self.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(syn::Index::from(index)),
        }
    }

    /// Source name of the field at `index`.
    pub fn source_name(&self, index: usize) -> String {
        match &self.ident {
            Some(ident) => ident.to_string(),
            None => index.to_string(),
        }
    }
}

impl ShapeInput {
    /// Returns all fields in declaration order.
    pub fn fields(&self) -> Vec<&ShapeField> {
        match &self.data {
            ast::Data::Struct(fields) => fields.iter().collect(),
            ast::Data::Enum(_) => Vec::new(),
        }
    }
}

/// Error from parsing attribute arguments.
#[derive(Debug)]
pub struct AttributeError {
    /// The error message.
    pub message: String,
    /// The span where the error occurred.
    pub span: Span,
}

impl AttributeError {
    /// Creates a new attribute error.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// Parse attribute arguments using darling.
fn parse_attribute_args<T: FromMeta + Default>(attr: &Attribute) -> Result<T, AttributeError> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(T::default()),
        syn::Meta::List(list) => {
            let nested = darling::ast::NestedMeta::parse_meta_list(list.tokens.clone())
                .map_err(|e| AttributeError::new(e.to_string(), list.delimiter.span().open()))?;
            T::from_list(&nested)
                .map_err(|e| AttributeError::new(e.to_string(), list.delimiter.span().open()))
        }
        syn::Meta::NameValue(nv) => Err(AttributeError::new(
            "Expected #[shape] or #[shape(...)] syntax",
            nv.eq_token.span,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(input: syn::DeriveInput) -> ShapeInput {
        ShapeInput::from_derive_input(&input).unwrap()
    }

    #[test]
    fn test_named_fields() {
        let input = parse(parse_quote! {
            struct Pair {
                #[shape(rename = "A")]
                a: i32,
                #[shape(skip)]
                b: String,
                c: u8,
            }
        });
        let fields = input.fields();
        assert_eq!(fields.len(), 3);

        let a = fields[0].args().unwrap();
        assert_eq!(a.rename.as_deref(), Some("A"));
        assert!(!a.skip);

        assert!(fields[1].args().unwrap().skip);
        assert!(fields[2].args().unwrap().rename.is_none());
        assert_eq!(fields[2].source_name(2), "c");
    }

    #[test]
    fn test_tuple_fields() {
        let input = parse(parse_quote! {
            struct Wrapper(i32, #[shape(skip)] u8);
        });
        let fields = input.fields();
        assert_eq!(fields.len(), 2);
        assert!(fields[0].ident.is_none());
        assert_eq!(fields[1].source_name(1), "1");
        assert!(matches!(fields[1].member(1), Member::Unnamed(ref index) if index.index == 1));
    }

    #[test]
    fn test_unit_struct() {
        let input = parse(parse_quote! {
            struct Marker;
        });
        assert!(input.fields().is_empty());
    }

    #[test]
    fn test_bad_attribute_args() {
        let input = parse(parse_quote! {
            struct Bad {
                #[shape(unknown)]
                a: i32,
            }
        });
        let err = input.fields()[0].args().unwrap_err();
        assert!(err.message.contains("unknown"));
    }

    #[test]
    fn test_name_value_form_is_rejected() {
        let input = parse(parse_quote! {
            struct Bad {
                #[shape = "A"]
                a: i32,
            }
        });
        let err = input.fields()[0].args().unwrap_err();
        assert!(err.message.contains("#[shape(...)]"));
    }
}
