//! Error handling utilities for the proc-macro.
//!
//! This module provides error types and utilities for generating
//! helpful compile-time error messages.

use proc_macro2::TokenStream;
use quote::quote_spanned;

use crate::attributes::AttributeError;

/// Error type for macro processing failures.
#[derive(Debug)]
pub enum MacroError {
    /// Failed to parse the input syntax.
    Parse(syn::Error),

    /// darling rejected the derive input.
    Darling(darling::Error),

    /// Invalid attribute usage.
    InvalidAttribute {
        message: String,
        span: proc_macro2::Span,
    },

    /// The macro was applied to an unsupported item type.
    UnsupportedItem {
        expected: &'static str,
        span: proc_macro2::Span,
    },
}

impl MacroError {
    /// Creates an "invalid attribute" error.
    pub fn invalid_attribute(message: impl Into<String>, span: proc_macro2::Span) -> Self {
        Self::InvalidAttribute {
            message: message.into(),
            span,
        }
    }

    /// Creates an "unsupported item" error.
    pub fn unsupported_item(expected: &'static str, span: proc_macro2::Span) -> Self {
        Self::UnsupportedItem { expected, span }
    }

    /// Converts this error into a compile-time error token stream.
    pub fn to_compile_error(&self) -> TokenStream {
        match self {
            Self::Parse(err) => err.to_compile_error(),

            Self::Darling(err) => err.clone().write_errors(),

            Self::InvalidAttribute { message, span } => {
                quote_spanned! {*span=>
                    compile_error!(#message);
                }
            }

            Self::UnsupportedItem { expected, span } => {
                let message = format!("#[derive(Shape)] can only be applied to {expected}");
                quote_spanned! {*span=>
                    compile_error!(#message);
                }
            }
        }
    }
}

impl From<syn::Error> for MacroError {
    fn from(err: syn::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<darling::Error> for MacroError {
    fn from(err: darling::Error) -> Self {
        Self::Darling(err)
    }
}

impl From<AttributeError> for MacroError {
    fn from(err: AttributeError) -> Self {
        Self::invalid_attribute(err.message, err.span)
    }
}

impl std::fmt::Display for MacroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Parse error: {err}"),
            Self::Darling(err) => write!(f, "{err}"),
            Self::InvalidAttribute { message, .. } => write!(f, "Invalid attribute: {message}"),
            Self::UnsupportedItem { expected, .. } => {
                write!(f, "#[derive(Shape)] can only be applied to {expected}")
            }
        }
    }
}

impl std::error::Error for MacroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Darling(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn test_invalid_attribute_error() {
        let err = MacroError::invalid_attribute("bad syntax", Span::call_site());
        let error_str = err.to_string();
        assert!(error_str.contains("bad syntax"));
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }

    #[test]
    fn test_unsupported_item_error() {
        let err = MacroError::unsupported_item("structs", Span::call_site());
        assert_eq!(err.to_string(), "#[derive(Shape)] can only be applied to structs");
    }

    #[test]
    fn test_from_attribute_error() {
        let err: MacroError = AttributeError::new("Unknown field: `x`", Span::call_site()).into();
        assert!(matches!(err, MacroError::InvalidAttribute { .. }));
    }
}
