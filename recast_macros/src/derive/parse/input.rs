//! Input parsing for the `Record` derive macro.
//!
//! This module gathers the struct identifier, fields, and relevant attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt as _;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, is_collection, parse_field_attrs, parse_struct_attrs};

/// One field that takes part in the generated table.
pub(crate) struct RecordField {
    pub ident: syn::Ident,
    /// Field name with any `r#` prefix removed.
    pub name: String,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

/// Everything the generator needs from the user's struct.
pub(crate) struct RecordInput {
    pub ident: syn::Ident,
    pub attrs: StructAttrs,
    /// Table fields in declaration order; skipped fields are omitted.
    pub fields: Vec<RecordField>,
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, tuple and unit structs, generic structs, and
/// composed or identity markers on collection-typed fields.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let ident = input.ident.clone();
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Record requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Record can only be derived for structs",
            ));
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic structs",
        ));
    }

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let field_attrs = parse_field_attrs(field)?;
        if field_attrs.skip {
            continue;
        }
        if field_attrs.holds_record() && is_collection(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "collection fields cannot be `composed` or `identity`",
            ));
        }
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Record requires named fields"));
        };
        fields.push(RecordField {
            name: field_ident.unraw().to_string(),
            ident: field_ident,
            ty: field.ty.clone(),
            attrs: field_attrs,
        });
    }
    Ok(RecordInput {
        ident,
        attrs,
        fields,
    })
}
