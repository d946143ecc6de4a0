//! `Inspect` and `Shape` code generation.
//!
//! Visible fields become the aggregate's view and are deep-copied one by one.
//! Fields marked `#[shape(skip)]` are left out of the view and reset to
//! `Default::default()` in copies; their presence is reported by
//! `Shape::hidden_field`.

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Generics, Ident, Member, Type, parse_quote};

use crate::attributes::ShapeInput;
use crate::error::MacroError;

/// One field of the derived struct, resolved for code generation.
#[derive(Debug)]
pub struct FieldPlan<'a> {
    /// Access path (`self.#member`).
    pub member: Member,
    /// Source name, used in hidden-field paths.
    pub source_name: String,
    /// Name shown by the formatter.
    pub display_name: String,
    pub ty: &'a Type,
    pub skip: bool,
}

/// Entry point for `#[derive(Shape)]`.
pub fn derive_shape_impl(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, MacroError> {
    let derive: DeriveInput = syn::parse2(input)?;
    match &derive.data {
        Data::Struct(_) => {}
        Data::Enum(data) => {
            return Err(MacroError::unsupported_item("structs", data.enum_token.span()));
        }
        Data::Union(data) => {
            return Err(MacroError::unsupported_item("structs", data.union_token.span()));
        }
    }

    let parsed = ShapeInput::from_derive_input(&derive)?;
    let mut plans = Vec::new();
    for (index, field) in parsed.fields().into_iter().enumerate() {
        let args = field.args()?;
        let source_name = field.source_name(index);
        plans.push(FieldPlan {
            member: field.member(index),
            display_name: args.rename.unwrap_or_else(|| source_name.clone()),
            source_name,
            ty: &field.ty,
            skip: args.skip,
        });
    }

    Ok(generate_shape(&parsed.ident, &parsed.generics, &plans))
}

/// Adds `T: Shape` for every type parameter and `Default` for skipped
/// field types.
fn bounded_generics(generics: &Generics, fields: &[FieldPlan<'_>]) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::interview::Shape));
    }
    for field in fields.iter().filter(|f| f.skip) {
        let ty = field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::core::default::Default));
    }
    generics
}

/// Generates the `Inspect` and `Shape` implementations.
pub fn generate_shape(name: &Ident, generics: &Generics, fields: &[FieldPlan<'_>]) -> TokenStream {
    let generics = bounded_generics(generics, fields);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let visible: Vec<&FieldPlan<'_>> = fields.iter().filter(|f| !f.skip).collect();
    let skipped: Vec<&FieldPlan<'_>> = fields.iter().filter(|f| f.skip).collect();

    let view_fields = visible.iter().map(|f| {
        let member = &f.member;
        let display = &f.display_name;
        quote! { ::interview::Field::new(#display, &self.#member) }
    });

    let copied = visible.iter().map(|f| {
        let member = &f.member;
        quote! { #member: ::interview::Shape::deep_copy(&self.#member) }
    });
    let reset = skipped.iter().map(|f| {
        let member = &f.member;
        quote! { #member: ::core::default::Default::default() }
    });

    let hidden_field = match skipped.first() {
        Some(first) => {
            let source = &first.source_name;
            quote! {
                fn hidden_field(
                    _visited: &mut ::std::vec::Vec<&'static str>,
                ) -> ::core::option::Option<::std::string::String> {
                    ::core::option::Option::Some(::std::string::String::from(#source))
                }
            }
        }
        None => {
            let checks = visible.iter().map(|f| {
                let ty = f.ty;
                let source = &f.source_name;
                quote! {
                    if let ::core::option::Option::Some(__path) =
                        <#ty as ::interview::Shape>::hidden_field(__visited)
                    {
                        return ::core::option::Option::Some(::std::format!("{}.{}", #source, __path));
                    }
                }
            });
            quote! {
                fn hidden_field(
                    __visited: &mut ::std::vec::Vec<&'static str>,
                ) -> ::core::option::Option<::std::string::String> {
                    let __name = ::core::any::type_name::<Self>();
                    if __visited.contains(&__name) {
                        return ::core::option::Option::None;
                    }
                    __visited.push(__name);
                    #(#checks)*
                    ::core::option::Option::None
                }
            }
        }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics ::interview::Inspect for #name #ty_generics #where_clause {
            fn view(&self) -> ::interview::View<'_> {
                ::interview::View::Aggregate(::std::vec![#(#view_fields),*])
            }
        }

        #[automatically_derived]
        impl #impl_generics ::interview::Shape for #name #ty_generics #where_clause {
            const KIND: ::interview::Kind = ::interview::Kind::Aggregate;

            fn deep_copy(&self) -> Self {
                Self {
                    #(#copied,)*
                    #(#reset,)*
                }
            }

            #hidden_field
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: TokenStream) -> String {
        derive_shape_impl(input).to_string()
    }

    #[test]
    fn test_named_struct() {
        let output = expand_str(quote! {
            struct Pair {
                #[shape(rename = "A")]
                a: i32,
                b: String,
            }
        });

        assert!(output.contains("impl :: interview :: Inspect for Pair"));
        assert!(output.contains("impl :: interview :: Shape for Pair"));
        assert!(output.contains("Field :: new (\"A\" , & self . a)"));
        assert!(output.contains("Field :: new (\"b\" , & self . b)"));
        assert!(output.contains("a : :: interview :: Shape :: deep_copy (& self . a)"));
        assert!(output.contains("< i32 as :: interview :: Shape > :: hidden_field"));
    }

    #[test]
    fn test_skipped_field() {
        let output = expand_str(quote! {
            struct Secret {
                #[shape(skip)]
                key: u64,
                value: i32,
            }
        });

        assert!(!output.contains("& self . key"));
        assert!(output.contains("key : :: core :: default :: Default :: default ()"));
        assert!(output.contains("u64 : :: core :: default :: Default"));
        assert!(output.contains("String :: from (\"key\")"));
    }

    #[test]
    fn test_tuple_struct() {
        let output = expand_str(quote! {
            struct Meters(f64);
        });

        assert!(output.contains("Field :: new (\"0\" , & self . 0)"));
        assert!(output.contains("0 : :: interview :: Shape :: deep_copy (& self . 0)"));
    }

    #[test]
    fn test_unit_struct() {
        let output = expand_str(quote! {
            struct Marker;
        });

        assert!(output.contains("View :: Aggregate (:: std :: vec ! [])"));
        assert!(output.contains("Self { }"));
    }

    #[test]
    fn test_generic_bounds() {
        let output = expand_str(quote! {
            struct Wrapper<T> {
                inner: T,
            }
        });

        assert!(output.contains("T : :: interview :: Shape"));
        assert!(output.contains("for Wrapper < T >"));
    }

    #[test]
    fn test_enum_is_rejected() {
        let output = expand_str(quote! {
            enum Choice {
                A,
                B,
            }
        });

        assert!(output.contains("compile_error"));
        assert!(output.contains("can only be applied to structs"));
    }

    #[test]
    fn test_union_is_rejected() {
        let output = expand_str(quote! {
            union Bits {
                a: u32,
                b: f32,
            }
        });

        assert!(output.contains("can only be applied to structs"));
    }

    #[test]
    fn test_invalid_attribute_becomes_compile_error() {
        let output = expand_str(quote! {
            struct Bad {
                #[shape(bogus)]
                a: i32,
            }
        });

        assert!(output.contains("compile_error"));
    }
}
