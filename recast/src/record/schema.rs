//! Static field tables describing record types.
//!
//! A [`RecordSchema`] is built once per type, on first use, by the code that
//! `#[derive(Record)]` generates. The engine consults it to enumerate source
//! fields in declaration order, to decide whether a target type declares a
//! field, and to read the per-field dispatch hints.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of the sub-field read by `#[recast(identity)]` when no explicit name
/// is configured.
pub const DEFAULT_IDENTITY_FIELD: &str = "id";

/// Runtime identity of a Rust type.
///
/// Equality, ordering and hashing use the [`TypeId`] alone; the name is
/// carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recast::TypeKey;
    ///
    /// assert_eq!(TypeKey::of::<u32>(), TypeKey::of::<u32>());
    /// assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<i32>());
    /// ```
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// How the engine produces a value for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldHint {
    /// Copy the value unchanged.
    Plain,
    /// Transform the value recursively when a composed rule matches.
    Composed,
    /// Replace the value with the named sub-field of the nested record.
    Identity(&'static str),
    /// Composed first; identity extraction when no composed rule matches.
    ComposedIdentity(&'static str),
}

impl FieldHint {
    /// Whether the field carries the composed marker.
    #[must_use]
    pub const fn is_composed(self) -> bool {
        matches!(self, Self::Composed | Self::ComposedIdentity(_))
    }

    /// Sub-field name read by identity extraction, if the field carries the
    /// identity marker.
    #[must_use]
    pub const fn identity_field(self) -> Option<&'static str> {
        match self {
            Self::Identity(name) | Self::ComposedIdentity(name) => Some(name),
            Self::Plain | Self::Composed => None,
        }
    }
}

/// One declared field of a record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    value_type: TypeKey,
    hint: FieldHint,
    nested: Option<TypeKey>,
}

impl FieldDescriptor {
    /// Describes a field holding values of `value_type`.
    #[must_use]
    pub const fn new(name: &'static str, value_type: TypeKey, hint: FieldHint) -> Self {
        Self {
            name,
            value_type,
            hint,
            nested: None,
        }
    }

    /// Records the record type held by a composed or identity field, with any
    /// `Option` wrapper removed.
    #[must_use]
    pub const fn with_nested(mut self, nested: TypeKey) -> Self {
        self.nested = Some(nested);
        self
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field.
    #[must_use]
    pub const fn value_type(&self) -> TypeKey {
        self.value_type
    }

    /// Dispatch hint.
    #[must_use]
    pub const fn hint(&self) -> FieldHint {
        self.hint
    }

    /// Declared nested record type, for composed and identity fields.
    #[must_use]
    pub const fn nested(&self) -> Option<TypeKey> {
        self.nested
    }
}

/// The field table of one record type.
///
/// # Examples
///
/// ```
/// use recast::{FieldDescriptor, FieldHint, RecordSchema, TypeKey};
///
/// struct Account;
///
/// let schema = RecordSchema::new(TypeKey::of::<Account>(), "Account")
///     .transformable(true)
///     .with_field(FieldDescriptor::new("id", TypeKey::of::<u64>(), FieldHint::Plain));
/// assert!(schema.has_field("id"));
/// assert!(!schema.has_field("name"));
/// ```
#[derive(Clone, Debug)]
pub struct RecordSchema {
    key: TypeKey,
    name: &'static str,
    transformable: bool,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Starts an empty, non-transformable table for the type `key`.
    #[must_use]
    pub const fn new(key: TypeKey, name: &'static str) -> Self {
        Self {
            key,
            name,
            transformable: false,
            fields: Vec::new(),
        }
    }

    /// Sets the eligibility marker.
    #[must_use]
    pub fn transformable(mut self, transformable: bool) -> Self {
        self.transformable = transformable;
        self
    }

    /// Appends a field; declaration order is preserved.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Type identity of the described record.
    #[must_use]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// Short type name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether instances may be used as a transform source.
    #[must_use]
    pub const fn is_transformable(&self) -> bool {
        self.transformable
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether the type declares a field called `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
