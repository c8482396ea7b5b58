//! Unit tests for `#[recast(...)]` parsing and type introspection.
