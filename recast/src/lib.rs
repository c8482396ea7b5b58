//! Declarative field-by-field transformation between unrelated record types.
//!
//! Application layers often keep separate plain-data representations of the
//! same concept: a persistence row and an API payload, say. `recast` copies
//! and reshapes values between such types without requiring them to share a
//! trait or a common ancestor. Types opt in with `#[derive(Record)]`, which
//! builds a per-type field table; sources additionally carry the
//! `#[recast(transformable)]` marker.
//!
//! Reshaping is driven by a [`Rulebook`]:
//!
//! - field-name rules rename source fields;
//! - composed-transform rules, keyed by field name or value type, send a
//!   `#[recast(composed)]` field through a nested transformation or keep it
//!   unchanged;
//! - `#[recast(identity)]` fields are replaced by one sub-field (`id` by
//!   default) of the record they hold.
//!
//! ```
//! use recast::{ComposedTarget, Record, Rulebook, TransformExt};
//!
//! #[derive(Clone, Default, Record)]
//! #[recast(transformable)]
//! struct AddressRow {
//!     street: String,
//!     city: String,
//! }
//!
//! #[derive(Clone, Default, Record)]
//! struct TenantRow {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Clone, Default, Record)]
//! #[recast(transformable)]
//! struct CustomerRow {
//!     id: u64,
//!     full_name: String,
//!     #[recast(composed)]
//!     address: AddressRow,
//!     #[recast(identity)]
//!     tenant: TenantRow,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Record)]
//! struct AddressDto {
//!     city: String,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Record)]
//! struct CustomerDto {
//!     id: u64,
//!     name: String,
//!     address: AddressDto,
//!     tenant: u64,
//! }
//!
//! let mut rules = Rulebook::new();
//! rules.rename("full_name", "name");
//! rules.compose("address", ComposedTarget::recurse::<AddressDto>())?;
//!
//! let row = CustomerRow {
//!     id: 1,
//!     full_name: "Ada Lovelace".into(),
//!     address: AddressRow { street: "1 Analytical Way".into(), city: "London".into() },
//!     tenant: TenantRow { id: 9, name: "Engines Ltd".into() },
//! };
//! let dto: CustomerDto = row.transform_into_with(&rules)?;
//! assert_eq!(dto.name, "Ada Lovelace");
//! assert_eq!(dto.address, AddressDto { city: "London".into() });
//! assert_eq!(dto.tenant, 9);
//! # Ok::<(), recast::TransformError>(())
//! ```

extern crate self as recast;

pub use recast_macros::Record;

mod error;
pub mod record;
pub mod rulebook;
mod transformer;

pub use error::{BoxError, TransformError, TransformResult};
pub use record::{
    DEFAULT_IDENTITY_FIELD, FieldDescriptor, FieldHint, FieldValue, Record, RecordSchema, TypeKey,
    WriteError,
};
pub use rulebook::{ComposedKey, ComposedTarget, Rulebook, TargetType};
pub use transformer::{TransformExt, Transformer, transform, transform_with};
