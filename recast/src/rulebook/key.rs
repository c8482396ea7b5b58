//! Keys and outcomes of composed-transform rules.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::BoxError;
use crate::record::{Record, RecordSchema, TypeKey};

/// Selects the fields a composed-transform rule applies to.
///
/// A name key matches the source field with that name; a type key matches any
/// composed field whose value has that runtime type. Name keys win when both
/// match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComposedKey {
    /// Matches a source field by name.
    ByName(String),
    /// Matches composed fields holding values of this type.
    ByType(TypeKey),
}

impl ComposedKey {
    /// Key matching the source field `name`.
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    /// Key matching values of type `T`.
    #[must_use]
    pub fn by_type<T: Any + ?Sized>() -> Self {
        Self::ByType(TypeKey::of::<T>())
    }
}

impl From<&str> for ComposedKey {
    fn from(name: &str) -> Self {
        Self::by_name(name)
    }
}

impl From<String> for ComposedKey {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<TypeKey> for ComposedKey {
    fn from(key: TypeKey) -> Self {
        Self::ByType(key)
    }
}

impl fmt::Display for ComposedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => f.write_str(name),
            Self::ByType(key) => write!(f, "type {key}"),
        }
    }
}

/// A record type that composed rules can recurse into.
///
/// Holds the type's identity, its field table, and its constructor, so the
/// engine can build instances without knowing the concrete type.
#[derive(Clone, Copy)]
pub struct TargetType {
    key: TypeKey,
    schema: fn() -> &'static RecordSchema,
    construct: fn() -> Result<Box<dyn Record>, BoxError>,
}

impl TargetType {
    /// Describes the record type `T`.
    #[must_use]
    pub fn of<T: Record>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            schema: T::static_schema,
            construct: construct_boxed::<T>,
        }
    }

    /// Type identity of the target.
    #[must_use]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// Field table of the target.
    #[must_use]
    pub fn schema(&self) -> &'static RecordSchema {
        (self.schema)()
    }

    /// Creates an empty target instance.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the type's constructor.
    pub fn instantiate(&self) -> Result<Box<dyn Record>, BoxError> {
        (self.construct)()
    }
}

fn construct_boxed<T: Record>() -> Result<Box<dyn Record>, BoxError> {
    let instance = T::instantiate()?;
    Ok(Box::new(instance))
}

impl PartialEq for TargetType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TargetType {}

impl PartialOrd for TargetType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TargetType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Debug for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetType").field(&self.key).finish()
    }
}

/// What a matching composed rule does with the field's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposedTarget {
    /// Transform the value into this record type, reusing the rulebook.
    Recurse(TargetType),
    /// Copy the value as it is.
    Unchanged,
}

impl ComposedTarget {
    /// Recurse into the record type `T`.
    #[must_use]
    pub fn recurse<T: Record>() -> Self {
        Self::Recurse(TargetType::of::<T>())
    }
}

impl From<TargetType> for ComposedTarget {
    fn from(target: TargetType) -> Self {
        Self::Recurse(target)
    }
}
