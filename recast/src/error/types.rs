//! Primary error enum for rule registration and transformation.

use thiserror::Error;

/// Boxed, thread-safe error used for constructor failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while registering rules or transforming records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// The source type lacks the eligibility marker.
    #[error(
        "type '{type_name}' has not been marked with #[recast(transformable)] and will not be transformed"
    )]
    NotTransformable {
        /// Name of the rejected source type.
        type_name: &'static str,
    },

    /// The target type could not be constructed.
    #[error("could not instantiate '{type_name}': {source}")]
    InstantiationFailure {
        /// Name of the target type.
        type_name: &'static str,
        /// Failure reported by the constructor.
        #[source]
        source: BoxError,
    },

    /// A rulebook mutator received an unusable entry.
    #[error("invalid rule entry '{key}': {reason}")]
    InvalidRuleEntry {
        /// Rendered key of the offending entry.
        key: String,
        /// Why the entry was refused.
        reason: String,
    },

    /// Identity extraction named a field the nested type does not declare.
    #[error("type '{type_name}' has no identity field '{field}'")]
    MissingIdentityField {
        /// Name of the nested record type.
        type_name: &'static str,
        /// Configured identity field name.
        field: String,
    },

    /// Identity extraction was requested on an absent nested value.
    #[error("cannot extract identity field '{identity}' from absent field '{field}'")]
    AbsentIdentitySource {
        /// Source field holding the absent value.
        field: &'static str,
        /// Configured identity field name.
        identity: &'static str,
    },

    /// A field table declared a field it could not read.
    #[error("type '{type_name}' declares field '{field}' but cannot read it")]
    UnreadableField {
        /// Name of the record type.
        type_name: &'static str,
        /// Declared field name.
        field: &'static str,
    },

    /// A field table declared a field but refused a write to it.
    #[error("type '{type_name}' declares field '{field}' but does not accept writes to it")]
    UnwritableField {
        /// Name of the target record type.
        type_name: &'static str,
        /// Field name reported by the record.
        field: String,
    },

    /// The resolved value cannot be stored in the target field.
    #[error("cannot store '{found}' into field '{field}' of type '{expected}'")]
    IncompatibleFieldType {
        /// Target field name.
        field: String,
        /// Declared type of the target field.
        expected: &'static str,
        /// Type of the rejected value.
        found: &'static str,
    },

    /// Umbrella for any failure while building the target of one call.
    #[error("could not transform {type_name}: {source}")]
    TransformationFailed {
        /// Name of the source type being transformed.
        type_name: &'static str,
        /// The original failure.
        #[source]
        source: Box<TransformError>,
    },
}
