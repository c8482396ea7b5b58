//! Type-erased field values and the write-time compatibility check.

use std::any::Any;
use std::fmt;

use thiserror::Error;

use super::Record;

/// A value travelling from a source field to a target field.
pub enum FieldValue {
    /// A concrete value together with the name of its type.
    Present {
        /// The boxed value.
        value: Box<dyn Any>,
        /// Type name reported when the value is rejected.
        type_name: &'static str,
    },
    /// No value: the outcome of transforming an absent nested record.
    Absent,
}

impl FieldValue {
    /// Wraps an owned value.
    ///
    /// # Examples
    ///
    /// ```
    /// use recast::FieldValue;
    ///
    /// let value = FieldValue::of(42_u32);
    /// assert_eq!(value.downcast::<u32>().ok(), Some(42));
    /// ```
    #[must_use]
    pub fn of<T: Any>(value: T) -> Self {
        Self::Present {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wraps a freshly transformed record.
    #[must_use]
    pub fn from_record(record: Box<dyn Record>) -> Self {
        let type_name = record.schema().key().name();
        Self::Present {
            value: record,
            type_name,
        }
    }

    /// Whether this is [`FieldValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Name of the carried type, or `"<absent>"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Present { type_name, .. } => *type_name,
            Self::Absent => "<absent>",
        }
    }

    /// Unwraps the value as `T`, handing `self` back on mismatch.
    ///
    /// # Errors
    ///
    /// Returns the original value when it is absent or holds another type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self {
            Self::Present { value, type_name } => value
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|original| Self::Present {
                    value: original,
                    type_name,
                }),
            Self::Absent => Err(Self::Absent),
        }
    }

    /// Stores the value into a field of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Incompatible`] when the value is absent or of a
    /// different type. `slot` is left untouched in that case.
    pub fn store<T: Any>(self, slot: &mut T) -> Result<(), WriteError> {
        let found = self.type_name();
        let stored = self
            .downcast::<T>()
            .map_err(|_| WriteError::incompatible::<T>(found))?;
        *slot = stored;
        Ok(())
    }

    /// Stores the value into a field of type `Option<T>`.
    ///
    /// Accepts an `Option<T>`, a bare `T` (stored as `Some`), or
    /// [`FieldValue::Absent`] (stored as `None`).
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Incompatible`] for any other type.
    pub fn store_optional<T: Any>(self, slot: &mut Option<T>) -> Result<(), WriteError> {
        let found = self.type_name();
        match self.downcast::<Option<T>>() {
            Ok(optional) => *slot = optional,
            Err(Self::Absent) => *slot = None,
            Err(present) => {
                let bare = present
                    .downcast::<T>()
                    .map_err(|_| WriteError::incompatible::<Option<T>>(found))?;
                *slot = Some(bare);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present { type_name, .. } => {
                f.debug_tuple("Present").field(type_name).finish()
            }
            Self::Absent => f.write_str("Absent"),
        }
    }
}

/// Failure to store a value into a record field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WriteError {
    /// The record declares no such field.
    #[error("no field named '{field}'")]
    UnknownField {
        /// Requested field name.
        field: String,
    },

    /// The value's type cannot be stored in the field.
    #[error("expected a value of type '{expected}', found '{found}'")]
    Incompatible {
        /// Declared type of the field.
        expected: &'static str,
        /// Type of the rejected value.
        found: &'static str,
    },
}

impl WriteError {
    /// Builds [`WriteError::UnknownField`]; used by generated code.
    #[must_use]
    pub fn unknown_field(field: &str) -> Self {
        Self::UnknownField {
            field: field.to_owned(),
        }
    }

    fn incompatible<T: Any>(found: &'static str) -> Self {
        Self::Incompatible {
            expected: std::any::type_name::<T>(),
            found,
        }
    }
}
