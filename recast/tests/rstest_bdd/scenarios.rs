//! Binds the transformation feature file to the step registry.

use crate::fixtures::{TransformContext, transform_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/transform.feature",
    fixtures = [transform_context: TransformContext]
);
