//! Registration-time validation of composed-transform rules.

use super::{ComposedKey, ComposedTarget};
use crate::{TransformError, TransformResult};

/// Collects `rules`, failing on the first entry that cannot match a field.
///
/// Nothing is returned unless every entry is valid, so callers can apply the
/// batch atomically.
pub(super) fn collect_composed<I, K, V>(rules: I) -> TransformResult<Vec<(ComposedKey, ComposedTarget)>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<ComposedKey>,
    V: Into<ComposedTarget>,
{
    rules
        .into_iter()
        .map(|(key, target)| {
            let composed_key = key.into();
            validate_key(&composed_key)?;
            Ok((composed_key, target.into()))
        })
        .collect()
}

fn validate_key(key: &ComposedKey) -> TransformResult<()> {
    match key {
        ComposedKey::ByName(name) if name.is_empty() => Err(TransformError::invalid_rule(
            name.as_str(),
            "field-name keys must not be empty",
        )),
        ComposedKey::ByName(name) if !is_field_identifier(name) => Err(
            TransformError::invalid_rule(name.as_str(), "field-name keys must be Rust identifiers"),
        ),
        ComposedKey::ByName(_) | ComposedKey::ByType(_) => Ok(()),
    }
}

/// Whether `name` could be the name of a struct field.
fn is_field_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let head_ok = first == '_' || first.is_alphabetic();
    head_ok && name != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
}
