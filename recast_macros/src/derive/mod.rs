//! Implementation of `#[derive(Record)]`.
//!
//! Parsing and generation are kept apart: [`parse`] validates the input and
//! collects attribute metadata, [`generate`] renders the trait impl.

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

/// Expands `#[derive(Record)]` for `input`.
///
/// # Errors
///
/// Returns a spanned error for unsupported input shapes and malformed
/// `#[recast(...)]` attributes.
pub(crate) fn derive_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::record_impl(&parsed))
}
