//! Procedural macros for `recast`.
//!
//! `Record` derives the field table and field accessors that the
//! transformation engine works through. Struct-level `#[recast(...)]` keys
//! control eligibility and construction; field-level keys select how each
//! field's value is produced.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `recast::Record`.
///
/// Supported attributes:
///
/// - `#[recast(transformable)]` on the struct allows it to be a transform
///   source;
/// - `#[recast(constructor = "path")]` names a `fn() -> Result<Self, E>` used
///   instead of `Default::default`;
/// - `#[recast(crate = "path")]` points generated code at a renamed
///   dependency;
/// - `#[recast(composed)]` on a field enables recursive transformation;
/// - `#[recast(identity)]` or `#[recast(identity = "name")]` on a field
///   replaces it with the nested record's identity field;
/// - `#[recast(skip)]` leaves a field out of the table.
///
/// Every table field must implement `Clone`; composed and identity fields
/// must hold a `Record` (optionally wrapped in `Option`).
#[proc_macro_derive(Record, attributes(recast))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
