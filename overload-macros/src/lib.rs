use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod type_tag;

/// Derive macro implementing `Membership` for a marker type.
///
/// Without attributes the type's predicate accepts values of the type itself:
///
/// ```rust,ignore
/// #[derive(overload::TypeTag)]
/// struct MatrixSize { rows: usize, cols: usize }
/// ```
///
/// `#[type_tag(predicate = ...)]` supplies any function or closure taking
/// `&overload::Value` and returning `bool`:
///
/// ```rust,ignore
/// #[derive(overload::TypeTag)]
/// #[type_tag(predicate = is_even)]
/// struct Even;
/// ```
#[proc_macro_derive(TypeTag, attributes(type_tag))]
pub fn derive_type_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    type_tag::derive_type_tag_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
