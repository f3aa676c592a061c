//! AttributeSource derive macro implementation
//!
//! Generates a `read_attribute` that matches the requested name against
//! the struct's readable fields and encodes the matching field's value.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils;

/// Receiver for the struct that derives `AttributeSource`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(attribute), supports(struct_named))]
struct AttributeSourceReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// Generics of the struct, passed through to the impl
    generics: syn::Generics,
    /// The struct data with parsed fields
    data: ast::Data<(), AttributeFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(attribute))]
struct AttributeFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// Accessor name to use instead of the field name
    #[darling(default)]
    rename: Option<String>,
    /// Leave the field out of the accessor table
    #[darling(default)]
    skip: bool,
}

/// Process the AttributeSource derive macro
pub fn process_derive_attribute_source(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate the `AttributeSource` implementation for a parsed struct
pub(crate) fn expand(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let receiver = AttributeSourceReceiver::from_derive_input(input)?;

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let readable: Vec<(String, &syn::Ident)> = fields
        .iter()
        .filter(|field| !field.skip)
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            Some((utils::accessor_name(ident, field.rename.as_deref()), ident))
        })
        .collect();

    if let Some((name, ident)) = utils::find_duplicate(&readable) {
        return Err(
            darling::Error::custom(format!("accessor `{name}` is defined more than once"))
                .with_span(ident),
        );
    }

    let names = readable.iter().map(|(name, _)| name);
    let idents = readable.iter().map(|(_, ident)| ident);

    let struct_name = &receiver.ident;
    let (impl_generics, ty_generics, where_clause) = receiver.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::projectable::AttributeSource for #struct_name #ty_generics #where_clause {
            fn read_attribute(
                &self,
                name: &str,
            ) -> ::core::option::Option<::projectable::AttributeResult> {
                match name {
                    #(
                        #names => ::core::option::Option::Some(
                            ::projectable::encode_attribute(&self.#idents),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
