//! Field tables and field-level access for transformable types.
//!
//! [`Record`] is the capability table the engine works through: it lists a
//! type's fields, reads and writes them by name, and exposes nested records
//! held by composed or identity fields. Implementations are normally
//! generated by `#[derive(Record)]`:
//!
//! ```
//! use recast::{FieldHint, Record};
//!
//! #[derive(Clone, Debug, Default, Record)]
//! struct Owner {
//!     id: u64,
//! }
//!
//! #[derive(Clone, Debug, Default, Record)]
//! #[recast(transformable)]
//! struct Invoice {
//!     number: String,
//!     #[recast(identity)]
//!     owner: Owner,
//! }
//!
//! let schema = Invoice::static_schema();
//! assert!(schema.is_transformable());
//! let hints: Vec<_> = schema.fields().iter().map(|f| f.hint()).collect();
//! assert_eq!(hints, [FieldHint::Plain, FieldHint::Identity("id")]);
//! ```

mod schema;
mod value;

pub use schema::{DEFAULT_IDENTITY_FIELD, FieldDescriptor, FieldHint, RecordSchema, TypeKey};
pub use value::{FieldValue, WriteError};

use std::any::Any;

use crate::BoxError;

/// A type with a named-field table that the transformer can read and write.
///
/// Every method taking a field name treats names absent from
/// [`Record::schema`] as unknown.
pub trait Record: Any {
    /// The field table of the value's type.
    fn schema(&self) -> &'static RecordSchema;

    /// The field table of `Self`, built on first use.
    fn static_schema() -> &'static RecordSchema
    where
        Self: Sized;

    /// Creates an empty instance to be populated field by field.
    ///
    /// # Errors
    ///
    /// Returns the constructor's failure; the engine reports it as
    /// [`crate::TransformError::InstantiationFailure`].
    fn instantiate() -> Result<Self, BoxError>
    where
        Self: Sized;

    /// Clones the named field's value.
    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// Borrows the record held by a composed or identity field.
    ///
    /// Returns `None` for unknown fields, for plain fields, and when the
    /// nested value is absent.
    fn nested_record(&self, name: &str) -> Option<&dyn Record>;

    /// Stores `value` into the named field.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::UnknownField`] for undeclared names and
    /// [`WriteError::Incompatible`] when the value does not fit the field's
    /// declared type.
    fn write_field(&mut self, name: &str, value: FieldValue) -> Result<(), WriteError>;
}
