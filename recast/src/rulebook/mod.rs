//! Mapping rules applied by the transformer.
//!
//! A [`Rulebook`] holds two independent tables:
//!
//! - field-name rules rename a source field to a differently named target
//!   field;
//! - composed-transform rules decide, for fields marked
//!   `#[recast(composed)]`, whether the value is transformed recursively into
//!   another record type or copied unchanged.
//!
//! Both tables are ordered maps that always exist; "no rules" and "empty
//! table" are the same state. The transformer only ever reads a rulebook, so
//! one rulebook can serve many calls, including concurrent ones.
//!
//! # Examples
//!
//! ```
//! use recast::{ComposedKey, ComposedTarget, Record, Rulebook};
//!
//! #[derive(Clone, Default, Record)]
//! struct AddressDto {
//!     city: String,
//! }
//!
//! let mut rules = Rulebook::new();
//! rules.rename("score", "points");
//! rules
//!     .compose(ComposedKey::by_name("address"), ComposedTarget::recurse::<AddressDto>())
//!     .expect("valid key");
//!
//! assert_eq!(rules.target_field_name("score"), Some("points"));
//! assert!(rules.has_composed_rules());
//! ```

mod key;
mod validate;

use std::collections::BTreeMap;

pub use key::{ComposedKey, ComposedTarget, TargetType};

use crate::TransformResult;
use crate::record::TypeKey;

/// Field-name and composed-transform rules for one transformation session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rulebook {
    field_names: BTreeMap<String, String>,
    composed: BTreeMap<ComposedKey, ComposedTarget>,
}

impl Rulebook {
    /// Creates a rulebook with both tables empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            field_names: BTreeMap::new(),
            composed: BTreeMap::new(),
        }
    }

    /// Merges field-name rules; existing source names are overwritten.
    pub fn add_field_name_rules<I, K, V>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.field_names
            .extend(rules.into_iter().map(|(from, to)| (from.into(), to.into())));
        self
    }

    /// Adds a single field-name rule renaming `from` to `to`.
    pub fn rename(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.field_names.insert(from.into(), to.into());
        self
    }

    /// Replaces the whole field-name table.
    pub fn reset_field_name_rules<I, K, V>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.field_names.clear();
        self.add_field_name_rules(rules)
    }

    /// Empties the field-name table.
    pub fn clear_field_name_rules(&mut self) {
        self.field_names.clear();
    }

    /// Whether any field-name rule is registered.
    #[must_use]
    pub fn has_field_rules(&self) -> bool {
        !self.field_names.is_empty()
    }

    /// Snapshot of the field-name table.
    #[must_use]
    pub fn field_name_rules(&self) -> BTreeMap<String, String> {
        self.field_names.clone()
    }

    /// Target name registered for the source field `source`.
    #[must_use]
    pub fn target_field_name(&self, source: &str) -> Option<&str> {
        self.field_names.get(source).map(String::as_str)
    }

    /// Validates and merges composed-transform rules.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TransformError::InvalidRuleEntry`] when a name key is
    /// empty or not an identifier. The table is left unchanged on failure.
    pub fn add_composed_rules<I, K, V>(&mut self, rules: I) -> TransformResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ComposedKey>,
        V: Into<ComposedTarget>,
    {
        let entries = validate::collect_composed(rules)?;
        self.composed.extend(entries);
        Ok(self)
    }

    /// Validates and adds a single composed-transform rule.
    ///
    /// # Errors
    ///
    /// As for [`Rulebook::add_composed_rules`].
    pub fn compose(
        &mut self,
        key: impl Into<ComposedKey>,
        target: impl Into<ComposedTarget>,
    ) -> TransformResult<&mut Self> {
        self.add_composed_rules([(key.into(), target.into())])
    }

    /// Validates `rules`, then replaces the whole composed table with them.
    ///
    /// # Errors
    ///
    /// As for [`Rulebook::add_composed_rules`]; the previous table survives a
    /// failed reset.
    pub fn reset_composed_rules<I, K, V>(&mut self, rules: I) -> TransformResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ComposedKey>,
        V: Into<ComposedTarget>,
    {
        let entries = validate::collect_composed(rules)?;
        self.composed = entries.into_iter().collect();
        Ok(self)
    }

    /// Empties the composed-transform table.
    pub fn clear_composed_rules(&mut self) {
        self.composed.clear();
    }

    /// Whether any composed-transform rule is registered.
    #[must_use]
    pub fn has_composed_rules(&self) -> bool {
        !self.composed.is_empty()
    }

    /// Snapshot of the composed-transform table.
    #[must_use]
    pub fn composed_rules(&self) -> BTreeMap<ComposedKey, ComposedTarget> {
        self.composed.clone()
    }

    /// Finds the composed rule for a field, preferring a rule keyed by the
    /// field's name over one keyed by the value's type.
    #[must_use]
    pub fn composed_rule(&self, field: &str, value_type: Option<TypeKey>) -> Option<ComposedTarget> {
        if self.composed.is_empty() {
            return None;
        }
        self.composed
            .get(&ComposedKey::by_name(field))
            .or_else(|| value_type.and_then(|ty| self.composed.get(&ComposedKey::ByType(ty))))
            .copied()
    }
}
