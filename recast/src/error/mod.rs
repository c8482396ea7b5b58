//! Error types produced by rule registration and transformation.

mod constructors;
mod types;

pub use types::{BoxError, TransformError};

/// Result alias used throughout the crate.
pub type TransformResult<T> = Result<T, TransformError>;
