//! `#[derive(TypeTag)]` - implements the `Membership` protocol.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, Expr, Ident, Token,
    parse::{Parse, ParseStream},
};

/// Arguments of the `#[type_tag(...)]` attribute.
pub(crate) struct TypeTagArgs {
    pub predicate: Option<Expr>,
}

impl Parse for TypeTagArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut predicate = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "predicate" => {
                    if predicate.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "duplicate attribute: predicate",
                        ));
                    }
                    predicate = Some(input.parse::<Expr>()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(TypeTagArgs { predicate })
    }
}

/// Implementation of `#[derive(TypeTag)]`.
pub fn derive_type_tag_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut args = TypeTagArgs { predicate: None };
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("type_tag")) {
        let parsed = attr.parse_args::<TypeTagArgs>()?;
        if parsed.predicate.is_some() {
            args.predicate = parsed.predicate;
        }
    }

    let body = match &args.predicate {
        Some(predicate) => quote! { (#predicate)(value) },
        None => quote! { value.is::<Self>() },
    };

    Ok(quote! {
        impl #impl_generics ::overload::Membership for #name #ty_generics #where_clause {
            fn contains(value: &::overload::Value) -> bool {
                #body
            }
        }
    })
}
