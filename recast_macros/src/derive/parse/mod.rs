//! Parsing utilities for the `Record` derive macro.
//!
//! Struct-level keys:
//!
//! - `transformable` (or `transformable = true|false`) sets the eligibility
//!   marker;
//! - `constructor = "path"` names a `fn() -> Result<Self, E>` used instead of
//!   `Default`;
//! - `crate = "path"` overrides the runtime crate path.
//!
//! Field-level keys:
//!
//! - `composed` marks the field for recursive transformation;
//! - `identity` / `identity = "name"` marks the field for identity
//!   extraction;
//! - `skip` leaves the field out of the table.
//!
//! Unknown keys are rejected so that typos surface at compile time.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Token};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{RecordField, RecordInput, parse_input};
use literals::{lit_bool, lit_path, lit_str};
pub(crate) use type_utils::{is_collection, option_inner};

/// Struct-level `#[recast(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub transformable: bool,
    /// Fallible zero-argument constructor replacing `Default::default`.
    pub constructor: Option<syn::Path>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[recast(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `recast::`.
    pub crate_path: Option<syn::Path>,
}

/// The sub-field read by identity extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum IdentityName {
    /// The runtime crate's `DEFAULT_IDENTITY_FIELD`.
    Default,
    /// An explicitly configured name.
    Named(String),
}

/// Field-level `#[recast(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub composed: bool,
    pub identity: Option<IdentityName>,
    pub skip: bool,
}

impl FieldAttrs {
    /// Whether the field holds a nested record the engine must be able to
    /// borrow.
    pub(crate) const fn holds_record(&self) -> bool {
        self.composed || self.identity.is_some()
    }
}

/// Iterate all `#[recast(...)]` attributes once and apply a callback.
fn parse_recast<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("recast")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Accepts both `key` and `key = true|false`.
fn parse_flag(meta: &ParseNestedMeta, key: &str) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        Ok(lit_bool(meta, key)?.value)
    } else {
        Ok(true)
    }
}

/// Extracts `#[recast(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_recast(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("transformable") => out.transformable = parse_flag(meta, "transformable")?,
            Some("constructor") => out.constructor = Some(lit_path(meta, "constructor")?),
            Some("crate") => out.crate_path = Some(lit_path(meta, "crate")?),
            _ => return Err(meta.error("unsupported recast option on struct")),
        }
        Ok(())
    })?;
    Ok(out)
}

/// Applies one field-level key.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    match meta.path.get_ident().map(ToString::to_string).as_deref() {
        Some("composed") => out.composed = parse_flag(meta, "composed")?,
        Some("identity") => {
            out.identity = Some(if meta.input.peek(Token![=]) {
                let name = lit_str(meta, "identity")?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "identity field name must not be empty"));
                }
                IdentityName::Named(name.value())
            } else {
                IdentityName::Default
            });
        }
        Some("skip") => out.skip = parse_flag(meta, "skip")?,
        _ => return Err(meta.error("unsupported recast option on field")),
    }
    Ok(())
}

/// Parses field-level `#[recast(...)]` attributes.
///
/// `skip` cannot be combined with `composed` or `identity`: a skipped field
/// has no table entry for the markers to describe.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_recast(&field.attrs, |meta| apply_field_attr(meta, &mut out))?;
    if out.skip && out.holds_record() {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` cannot be combined with `composed` or `identity`",
        ));
    }
    Ok(out)
}
