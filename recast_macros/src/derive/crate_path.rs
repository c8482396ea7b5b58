//! Path prefix for runtime items referenced by generated code.
//!
//! Generated impls name `Record`, `RecordSchema`, `FieldValue` and friends
//! through a single prefix. It is `recast` unless the struct carries
//! `#[recast(crate = "...")]`, which is needed when the dependency is
//! renamed in `Cargo.toml` or re-exported from another crate.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Returns the prefix tokens for `#krate::Record` style paths.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { recast }, ToTokens::to_token_stream)
}
