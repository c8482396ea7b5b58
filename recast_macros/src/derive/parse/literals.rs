//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitBool, LitStr};

/// Parses the literal after `key =` and narrows it with `extractor`.
///
/// Anything that is not the expected kind of literal, including bare paths
/// such as `constructor = make`, is reported as `"{key} must be a {kind}"`.
fn parse_lit<T, F>(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
    kind: &str,
    extractor: F,
) -> Result<T, syn::Error>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let value = meta.value()?;
    let span = value.span();
    let mismatch = |at| syn::Error::new(at, format!("{key} must be a {kind}"));
    let literal = value.parse::<Lit>().map_err(|_| mismatch(span))?;
    let literal_span = literal.span();
    extractor(literal).ok_or_else(|| mismatch(literal_span))
}

/// Parses a string literal from an attribute value.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[recast(identity = "code")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "identity")?;
///     assert_eq!(s.value(), "code");
///     Ok(())
/// }).unwrap();
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a `true` / `false` literal, as in `transformable = false`.
pub(crate) fn lit_bool(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
) -> Result<LitBool, syn::Error> {
    parse_lit(meta, key, "boolean", |lit| match lit {
        Lit::Bool(b) => Some(b),
        _ => None,
    })
}

/// Parses a string literal holding a Rust path, such as `crate = "alias"`.
pub(crate) fn lit_path(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
) -> Result<syn::Path, syn::Error> {
    let s = lit_str(meta, key)?;
    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))
}
