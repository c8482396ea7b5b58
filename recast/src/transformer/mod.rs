//! The transformation engine.
//!
//! A [`Transformer`] converts one record into a fresh instance of another
//! record type. For every source field, in declaration order, it resolves
//! the target field name through the rulebook's field-name rules, skips the
//! field when the target does not declare it, picks a value (recursive
//! composed transform, identity extraction, or a plain copy), and writes it.
//! The first failure aborts the call and the partially built target is
//! dropped.
//!
//! # Examples
//!
//! ```
//! use recast::{Record, Rulebook, Transformer};
//!
//! #[derive(Clone, Default, Record)]
//! #[recast(transformable)]
//! struct Score {
//!     id: u32,
//!     score: u32,
//!     label: String,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Record)]
//! struct Points {
//!     id: u32,
//!     points: u32,
//! }
//!
//! let mut rules = Rulebook::new();
//! rules.rename("score", "points");
//!
//! let source = Score { id: 1, score: 42, label: "ignored".into() };
//! let points: Points = Transformer::with_rulebook(&rules)
//!     .transform_present(&source)
//!     .expect("compatible shapes");
//! assert_eq!(points, Points { id: 1, points: 42 });
//! ```

mod strategy;

use tracing::trace;

use crate::record::{Record, RecordSchema};
use crate::rulebook::{Rulebook, TargetType};
use crate::{BoxError, TransformError, TransformResult};

/// Performs transformations, optionally guided by a [`Rulebook`].
///
/// The transformer holds no state besides the borrowed rulebook; it is cheap
/// to create per call and may be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transformer<'r> {
    rulebook: Option<&'r Rulebook>,
}

impl<'r> Transformer<'r> {
    /// A transformer that applies no rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rulebook: None }
    }

    /// A transformer that applies `rulebook`.
    #[must_use]
    pub const fn with_rulebook(rulebook: &'r Rulebook) -> Self {
        Self {
            rulebook: Some(rulebook),
        }
    }

    /// The rulebook in use, if any.
    #[must_use]
    pub const fn rulebook(&self) -> Option<&'r Rulebook> {
        self.rulebook
    }

    /// Transforms an optional source into `T`.
    ///
    /// An absent source yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// See [`Transformer::transform_present`].
    pub fn transform<T: Record>(
        &self,
        source: Option<&dyn Record>,
    ) -> TransformResult<Option<T>> {
        source
            .map(|present| self.transform_present(present))
            .transpose()
    }

    /// Transforms `source` into a new `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotTransformable`] when the source type lacks
    /// the eligibility marker. Every later failure, including constructor
    /// failures and failures of nested transforms, is reported as
    /// [`TransformError::TransformationFailed`] naming the source type.
    pub fn transform_present<T: Record>(&self, source: &dyn Record) -> TransformResult<T> {
        let source_schema = eligible_schema(source)?;
        let target_schema = T::static_schema();
        let _span = transform_span(source_schema, target_schema).entered();
        T::instantiate()
            .map_err(|err| instantiation_failure(target_schema, err))
            .and_then(|mut target| {
                self.populate(source, &mut target)?;
                Ok(target)
            })
            .map_err(|err| TransformError::transformation_failed(source_schema.name(), err))
    }

    /// Transforms `source` into a new instance of the runtime-selected
    /// `target` type.
    ///
    /// # Errors
    ///
    /// As for [`Transformer::transform_present`].
    pub fn transform_dyn(
        &self,
        source: &dyn Record,
        target: &TargetType,
    ) -> TransformResult<Box<dyn Record>> {
        let source_schema = eligible_schema(source)?;
        let target_schema = target.schema();
        let _span = transform_span(source_schema, target_schema).entered();
        target
            .instantiate()
            .map_err(|err| instantiation_failure(target_schema, err))
            .and_then(|mut instance| {
                self.populate(source, instance.as_mut())?;
                Ok(instance)
            })
            .map_err(|err| TransformError::transformation_failed(source_schema.name(), err))
    }

    fn populate<R: Record + ?Sized>(
        &self,
        source: &dyn Record,
        target: &mut R,
    ) -> TransformResult<()> {
        let target_schema = target.schema();
        for field in source.schema().fields() {
            let target_name = self.target_name(field.name());
            if !target_schema.has_field(target_name) {
                trace!(
                    field = field.name(),
                    target_field = target_name,
                    "target has no such field; skipping"
                );
                continue;
            }
            let value = self.resolve_value(source, field)?;
            target.write_field(target_name, value).map_err(|err| {
                TransformError::from_write(target_schema.name(), target_name, err)
            })?;
        }
        Ok(())
    }

    fn target_name<'n>(&self, source_name: &'n str) -> &'n str
    where
        'r: 'n,
    {
        self.rulebook
            .and_then(|rules| rules.target_field_name(source_name))
            .unwrap_or(source_name)
    }
}

fn eligible_schema(source: &dyn Record) -> TransformResult<&'static RecordSchema> {
    let schema = source.schema();
    if schema.is_transformable() {
        Ok(schema)
    } else {
        Err(TransformError::NotTransformable {
            type_name: schema.name(),
        })
    }
}

fn instantiation_failure(target: &RecordSchema, source: BoxError) -> TransformError {
    TransformError::InstantiationFailure {
        type_name: target.name(),
        source,
    }
}

fn transform_span(source: &RecordSchema, target: &RecordSchema) -> tracing::Span {
    tracing::debug_span!("transform", source = source.name(), target = target.name())
}

/// Transforms `source` into `T` without rules.
///
/// # Errors
///
/// See [`Transformer::transform_present`].
///
/// # Examples
///
/// ```
/// use recast::Record;
///
/// #[derive(Clone, Default, Record)]
/// #[recast(transformable)]
/// struct Row {
///     id: i64,
///     label: String,
/// }
///
/// #[derive(Clone, Default, Record)]
/// struct Key {
///     id: i64,
/// }
///
/// let row = Row { id: 7, label: "seven".into() };
/// let key: Option<Key> = recast::transform(Some(&row)).expect("subset of fields");
/// assert_eq!(key.map(|k| k.id), Some(7));
///
/// let nothing: Option<Key> = recast::transform(None::<&Row>).expect("absent source");
/// assert!(nothing.is_none());
/// ```
pub fn transform<S: Record, T: Record>(source: Option<&S>) -> TransformResult<Option<T>> {
    Transformer::new().transform(source.map(|present| present as &dyn Record))
}

/// Transforms `source` into `T`, applying `rulebook`.
///
/// # Errors
///
/// See [`Transformer::transform_present`].
pub fn transform_with<S: Record, T: Record>(
    source: Option<&S>,
    rulebook: &Rulebook,
) -> TransformResult<Option<T>> {
    Transformer::with_rulebook(rulebook).transform(source.map(|present| present as &dyn Record))
}

/// Method-call sugar over [`Transformer`] for any record.
pub trait TransformExt: Record + Sized {
    /// Transforms `self` into `T` without rules.
    ///
    /// # Errors
    ///
    /// See [`Transformer::transform_present`].
    fn transform_into<T: Record>(&self) -> TransformResult<T> {
        Transformer::new().transform_present(self)
    }

    /// Transforms `self` into `T`, applying `rulebook`.
    ///
    /// # Errors
    ///
    /// See [`Transformer::transform_present`].
    fn transform_into_with<T: Record>(&self, rulebook: &Rulebook) -> TransformResult<T> {
        Transformer::with_rulebook(rulebook).transform_present(self)
    }
}

impl<S: Record> TransformExt for S {}
