//! Code generation for `#[derive(Record)]`.
//!
//! The generated impl holds a function-local `LazyLock` for the field table
//! and one `match` per accessor, keyed by field name.

use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;
use syn::ext::IdentExt as _;

use super::crate_path;
use super::parse::{IdentityName, RecordField, RecordInput, option_inner};


/// Renders the `FieldHint` expression for one field.
fn field_hint(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let identity = field.attrs.identity.as_ref().map(|name| match name {
        IdentityName::Default => quote! { #krate::DEFAULT_IDENTITY_FIELD },
        IdentityName::Named(name) => quote! { #name },
    });
    match (field.attrs.composed, identity) {
        (false, None) => quote! { #krate::FieldHint::Plain },
        (true, None) => quote! { #krate::FieldHint::Composed },
        (false, Some(name)) => quote! { #krate::FieldHint::Identity(#name) },
        (true, Some(name)) => quote! { #krate::FieldHint::ComposedIdentity(#name) },
    }
}

/// Renders the `FieldDescriptor` for one field.
fn descriptor(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let name = LitStr::new(&field.name, field.ident.span());
    let ty = &field.ty;
    let hint = field_hint(field, krate);
    let base = quote! {
        #krate::FieldDescriptor::new(#name, #krate::TypeKey::of::<#ty>(), #hint)
    };
    if field.attrs.holds_record() {
        let nested = option_inner(ty).unwrap_or(ty);
        quote! { #base.with_nested(#krate::TypeKey::of::<#nested>()) }
    } else {
        base
    }
}

fn read_arm(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let name = LitStr::new(&field.name, field.ident.span());
    let ident = &field.ident;
    quote! {
        #name => ::core::option::Option::Some(
            #krate::FieldValue::of(::core::clone::Clone::clone(&self.#ident)),
        ),
    }
}

/// Only composed and identity fields hand out nested records.
fn nested_arm(field: &RecordField, krate: &TokenStream) -> Option<TokenStream> {
    if !field.attrs.holds_record() {
        return None;
    }
    let name = LitStr::new(&field.name, field.ident.span());
    let ident = &field.ident;
    Some(if option_inner(&field.ty).is_some() {
        quote! {
            #name => self.#ident.as_ref().map(|nested| nested as &dyn #krate::Record),
        }
    } else {
        quote! {
            #name => ::core::option::Option::Some(&self.#ident as &dyn #krate::Record),
        }
    })
}

fn write_arm(field: &RecordField) -> TokenStream {
    let name = LitStr::new(&field.name, field.ident.span());
    let ident = &field.ident;
    if option_inner(&field.ty).is_some() {
        quote! { #name => value.store_optional(&mut self.#ident), }
    } else {
        quote! { #name => value.store(&mut self.#ident), }
    }
}

fn instantiate_body(input: &RecordInput) -> TokenStream {
    input.attrs.constructor.as_ref().map_or_else(
        || quote! { ::core::result::Result::Ok(<Self as ::core::default::Default>::default()) },
        |path| quote! { #path().map_err(::core::convert::Into::into) },
    )
}

/// Generates the `Record` implementation for the parsed struct.
pub(crate) fn record_impl(input: &RecordInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let type_name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let transformable = input.attrs.transformable;
    let descriptors = input.fields.iter().map(|f| descriptor(f, &krate));
    let read_arms = input.fields.iter().map(|f| read_arm(f, &krate));
    let nested_arms = input.fields.iter().filter_map(|f| nested_arm(f, &krate));
    let write_arms = input.fields.iter().map(write_arm);
    let instantiate = instantiate_body(input);

    quote! {
        #[automatically_derived]
        impl #krate::Record for #ident {
            fn schema(&self) -> &'static #krate::RecordSchema {
                <Self as #krate::Record>::static_schema()
            }

            fn static_schema() -> &'static #krate::RecordSchema {
                static SCHEMA: ::std::sync::LazyLock<#krate::RecordSchema> =
                    ::std::sync::LazyLock::new(|| {
                        #krate::RecordSchema::new(#krate::TypeKey::of::<#ident>(), #type_name)
                            .transformable(#transformable)
                            #( .with_field(#descriptors) )*
                    });
                &SCHEMA
            }

            fn instantiate() -> ::core::result::Result<Self, #krate::BoxError> {
                #instantiate
            }

            fn read_field(
                &self,
                name: &str,
            ) -> ::core::option::Option<#krate::FieldValue> {
                match name {
                    #( #read_arms )*
                    _ => ::core::option::Option::None,
                }
            }

            fn nested_record(
                &self,
                name: &str,
            ) -> ::core::option::Option<&dyn #krate::Record> {
                match name {
                    #( #nested_arms )*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_field(
                &mut self,
                name: &str,
                value: #krate::FieldValue,
            ) -> ::core::result::Result<(), #krate::WriteError> {
                match name {
                    #( #write_arms )*
                    _ => {
                        ::core::mem::drop(value);
                        ::core::result::Result::Err(#krate::WriteError::unknown_field(name))
                    }
                }
            }
        }
    }
}
