//! Per-field value selection.
//!
//! Strategies are tried in a fixed order: a matching composed rule, then
//! identity extraction, then a plain copy.

use tracing::{debug, trace};

use super::Transformer;
use crate::record::{FieldDescriptor, FieldValue, Record};
use crate::rulebook::{ComposedTarget, TargetType};
use crate::{TransformError, TransformResult};

impl Transformer<'_> {
    pub(super) fn resolve_value(
        &self,
        source: &dyn Record,
        field: &FieldDescriptor,
    ) -> TransformResult<FieldValue> {
        let hint = field.hint();
        if hint.is_composed() {
            match self.composed_rule(source, field) {
                Some(ComposedTarget::Recurse(target)) => return self.recurse(source, field, &target),
                Some(ComposedTarget::Unchanged) => {
                    trace!(field = field.name(), "composed rule keeps value unchanged");
                    return copy(source, field);
                }
                None => trace!(field = field.name(), "no composed rule matched"),
            }
        }
        match hint.identity_field() {
            Some(identity) => extract_identity(source, field, identity),
            None => copy(source, field),
        }
    }

    /// Looks up the composed rule for `field`; the type key is the nested
    /// value's runtime type, or the declared nested type when it is absent.
    fn composed_rule(&self, source: &dyn Record, field: &FieldDescriptor) -> Option<ComposedTarget> {
        let rulebook = self.rulebook?;
        let value_type = source
            .nested_record(field.name())
            .map(|nested| nested.schema().key())
            .or_else(|| field.nested());
        rulebook.composed_rule(field.name(), value_type)
    }

    fn recurse(
        &self,
        source: &dyn Record,
        field: &FieldDescriptor,
        target: &TargetType,
    ) -> TransformResult<FieldValue> {
        let Some(nested) = source.nested_record(field.name()) else {
            trace!(field = field.name(), "composed value absent");
            return Ok(FieldValue::Absent);
        };
        debug!(
            field = field.name(),
            nested = nested.schema().name(),
            target = target.schema().name(),
            "recursing into composed field"
        );
        self.transform_dyn(nested, target).map(FieldValue::from_record)
    }
}

fn copy(source: &dyn Record, field: &FieldDescriptor) -> TransformResult<FieldValue> {
    source
        .read_field(field.name())
        .ok_or_else(|| TransformError::UnreadableField {
            type_name: source.schema().name(),
            field: field.name(),
        })
}

fn extract_identity(
    source: &dyn Record,
    field: &FieldDescriptor,
    identity: &'static str,
) -> TransformResult<FieldValue> {
    let nested = source
        .nested_record(field.name())
        .ok_or(TransformError::AbsentIdentitySource {
            field: field.name(),
            identity,
        })?;
    let missing = || TransformError::MissingIdentityField {
        type_name: nested.schema().name(),
        field: identity.to_owned(),
    };
    if !nested.schema().has_field(identity) {
        return Err(missing());
    }
    trace!(field = field.name(), identity, "extracting identity");
    nested.read_field(identity).ok_or_else(missing)
}
