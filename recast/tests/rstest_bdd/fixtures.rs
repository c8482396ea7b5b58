//! Record types and scenario state shared by the behavioural steps.

use std::collections::BTreeMap;

use recast::{ComposedKey, ComposedTarget, Record, Rulebook, TransformResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
#[recast(transformable)]
pub struct Labelled {
    pub id: i64,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct IdOnly {
    pub id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct Coded {
    pub code: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
#[recast(transformable)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct CitySummary {
    pub city: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct StreetSummary {
    pub street: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
#[recast(transformable)]
pub struct Customer {
    #[recast(composed)]
    pub billing: Address,
    #[recast(composed)]
    pub shipping: Option<Address>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct CustomerView {
    pub billing: Option<StreetSummary>,
    pub shipping: Option<CitySummary>,
}

/// Scenario state shared between the transformation steps.
#[derive(Debug, Default, ScenarioState)]
pub struct TransformContext {
    pub rules: Slot<Rulebook>,
    pub labelled: Slot<Labelled>,
    pub id_only: Slot<IdOnly>,
    pub customer: Slot<Customer>,
    pub id_result: Slot<TransformResult<IdOnly>>,
    pub coded_result: Slot<TransformResult<Coded>>,
    pub labelled_result: Slot<TransformResult<Labelled>>,
    pub customer_result: Slot<TransformResult<CustomerView>>,
    pub composed_before: Slot<BTreeMap<ComposedKey, ComposedTarget>>,
    pub registration: Slot<TransformResult<()>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn transform_context() -> TransformContext {
    TransformContext::default()
}
