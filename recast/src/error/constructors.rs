//! Constructors and inspection helpers for `TransformError`.

use super::TransformError;
use crate::record::WriteError;

impl TransformError {
    /// Wraps `cause` as the failure of transforming a `type_name` source.
    ///
    /// # Examples
    ///
    /// ```
    /// use recast::TransformError;
    ///
    /// let cause = TransformError::NotTransformable { type_name: "Inner" };
    /// let err = TransformError::transformation_failed("Outer", cause);
    /// assert!(matches!(err, TransformError::TransformationFailed { type_name: "Outer", .. }));
    /// ```
    #[must_use]
    pub fn transformation_failed(type_name: &'static str, cause: Self) -> Self {
        Self::TransformationFailed {
            type_name,
            source: Box::new(cause),
        }
    }

    /// Builds [`TransformError::InvalidRuleEntry`].
    #[must_use]
    pub fn invalid_rule(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRuleEntry {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Maps a write failure on the field `field` of the `type_name` target.
    #[must_use]
    pub fn from_write(type_name: &'static str, field: &str, err: WriteError) -> Self {
        match err {
            WriteError::Incompatible { expected, found } => Self::IncompatibleFieldType {
                field: field.to_owned(),
                expected,
                found,
            },
            WriteError::UnknownField { field: unknown } => Self::UnwritableField {
                type_name,
                field: unknown,
            },
        }
    }

    /// Follows nested [`TransformError::TransformationFailed`] layers to the
    /// error that started the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use recast::TransformError;
    ///
    /// let inner = TransformError::NotTransformable { type_name: "Leaf" };
    /// let err = TransformError::transformation_failed(
    ///     "Root",
    ///     TransformError::transformation_failed("Branch", inner),
    /// );
    /// assert!(matches!(
    ///     err.root_cause(),
    ///     TransformError::NotTransformable { type_name: "Leaf" }
    /// ));
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::TransformationFailed { source, .. } = current {
            current = source;
        }
        current
    }

    /// Source type names from the outermost call inwards.
    #[must_use]
    pub fn transform_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::TransformationFailed { type_name, source } = current {
            path.push(*type_name);
            current = source;
        }
        path
    }
}
