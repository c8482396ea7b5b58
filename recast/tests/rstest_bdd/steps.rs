//! Step definitions for the transformation scenarios.

use anyhow::{Result, anyhow, ensure};
use recast::{ComposedKey, ComposedTarget, Rulebook, TransformError, TransformExt, TypeKey};
use rstest_bdd_macros::{given, then, when};

use crate::fixtures::{
    Address, CitySummary, Coded, Customer, CustomerView, IdOnly, Labelled, StreetSummary,
    TransformContext,
};

fn address(street: &str, city: &str) -> Address {
    Address {
        street: street.to_owned(),
        city: city.to_owned(),
    }
}

/// Applies `edit` to the scenario's rulebook, creating it on first use.
fn edit_rules<F>(ctx: &TransformContext, edit: F) -> Result<()>
where
    F: FnOnce(&mut Rulebook) -> recast::TransformResult<()>,
{
    let mut rules = ctx.rules.take().unwrap_or_default();
    edit(&mut rules).map_err(|err| anyhow!(err))?;
    ctx.rules.set(rules);
    Ok(())
}

fn rules_or_default(ctx: &TransformContext) -> Rulebook {
    ctx.rules.take().unwrap_or_default()
}

#[given("a labelled source record")]
fn labelled_source(transform_context: &TransformContext) -> Result<()> {
    ensure!(
        transform_context.labelled.is_empty(),
        "labelled record already initialised"
    );
    transform_context.labelled.set(Labelled {
        id: 5,
        label: "five".to_owned(),
    });
    Ok(())
}

#[given("a rule renaming id to code")]
fn rename_id(transform_context: &TransformContext) -> Result<()> {
    edit_rules(transform_context, |rules| {
        rules.rename("id", "code");
        Ok(())
    })
}

#[given("a customer with billing and shipping addresses")]
fn full_customer(transform_context: &TransformContext) -> Result<()> {
    transform_context.customer.set(Customer {
        billing: address("1 Main St", "Leeds"),
        shipping: Some(address("2 Side St", "York")),
    });
    Ok(())
}

#[given("a customer without a shipping address")]
fn customer_without_shipping(transform_context: &TransformContext) -> Result<()> {
    transform_context.customer.set(Customer {
        billing: address("1 Main St", "Leeds"),
        shipping: None,
    });
    Ok(())
}

#[given("a type rule recursing addresses into city summaries")]
fn type_rule(transform_context: &TransformContext) -> Result<()> {
    edit_rules(transform_context, |rules| {
        rules
            .compose(TypeKey::of::<Address>(), ComposedTarget::recurse::<CitySummary>())
            .map(|_| ())
    })
}

#[given("a name rule recursing billing into street summaries")]
fn name_rule(transform_context: &TransformContext) -> Result<()> {
    edit_rules(transform_context, |rules| {
        rules
            .compose("billing", ComposedTarget::recurse::<StreetSummary>())
            .map(|_| ())
    })
}

#[given("an id-only record used as a source")]
fn id_only_source(transform_context: &TransformContext) -> Result<()> {
    transform_context.id_only.set(IdOnly { id: 3 });
    Ok(())
}

#[when("the labelled record is transformed into an id-only record")]
fn transform_to_id(transform_context: &TransformContext) -> Result<()> {
    let source = transform_context
        .labelled
        .take()
        .ok_or_else(|| anyhow!("labelled record not initialised"))?;
    let rules = rules_or_default(transform_context);
    transform_context
        .id_result
        .set(source.transform_into_with(&rules));
    Ok(())
}

#[when("the labelled record is transformed into a code record")]
fn transform_to_code(transform_context: &TransformContext) -> Result<()> {
    let source = transform_context
        .labelled
        .take()
        .ok_or_else(|| anyhow!("labelled record not initialised"))?;
    let rules = rules_or_default(transform_context);
    transform_context
        .coded_result
        .set(source.transform_into_with(&rules));
    Ok(())
}

#[when("the customer is transformed")]
fn transform_customer(transform_context: &TransformContext) -> Result<()> {
    let source = transform_context
        .customer
        .take()
        .ok_or_else(|| anyhow!("customer not initialised"))?;
    let rules = rules_or_default(transform_context);
    transform_context
        .customer_result
        .set(source.transform_into_with(&rules));
    Ok(())
}

#[when("the id-only record is transformed into a labelled record")]
fn transform_unmarked(transform_context: &TransformContext) -> Result<()> {
    let source = transform_context
        .id_only
        .take()
        .ok_or_else(|| anyhow!("id-only record not initialised"))?;
    transform_context
        .labelled_result
        .set(source.transform_into());
    Ok(())
}

#[when("a batch with an invalid field-name key is added")]
fn add_invalid_batch(transform_context: &TransformContext) -> Result<()> {
    let mut rules = rules_or_default(transform_context);
    transform_context.composed_before.set(rules.composed_rules());
    let outcome = rules
        .add_composed_rules([
            (ComposedKey::by_name("shipping"), ComposedTarget::Unchanged),
            (ComposedKey::by_name("not a field"), ComposedTarget::Unchanged),
        ])
        .map(|_| ());
    transform_context.registration.set(outcome);
    transform_context.rules.set(rules);
    Ok(())
}

#[then("the id is copied and the label is dropped")]
fn id_copied(transform_context: &TransformContext) -> Result<()> {
    let result = transform_context
        .id_result
        .take()
        .ok_or_else(|| anyhow!("transform result unavailable"))?;
    let id_only = result.map_err(|err| anyhow!(err))?;
    ensure!(id_only == IdOnly { id: 5 }, "unexpected result {id_only:?}");
    Ok(())
}

#[then("the code holds the source id")]
fn code_holds_id(transform_context: &TransformContext) -> Result<()> {
    let result = transform_context
        .coded_result
        .take()
        .ok_or_else(|| anyhow!("transform result unavailable"))?;
    let coded = result.map_err(|err| anyhow!(err))?;
    ensure!(coded == Coded { code: 5 }, "unexpected result {coded:?}");
    Ok(())
}

fn customer_view(transform_context: &TransformContext) -> Result<CustomerView> {
    let view = transform_context
        .customer_result
        .with_ref(|result| result.as_ref().cloned().map_err(ToString::to_string))
        .ok_or_else(|| anyhow!("transform result unavailable"))?;
    view.map_err(|err| anyhow!(err))
}

#[then("billing holds a street summary")]
fn billing_is_street(transform_context: &TransformContext) -> Result<()> {
    let view = customer_view(transform_context)?;
    let expected = StreetSummary {
        street: "1 Main St".to_owned(),
    };
    ensure!(
        view.billing == Some(expected),
        "unexpected billing {:?}",
        view.billing
    );
    Ok(())
}

#[then("shipping holds a city summary")]
fn shipping_is_city(transform_context: &TransformContext) -> Result<()> {
    let view = customer_view(transform_context)?;
    let expected = CitySummary {
        city: "York".to_owned(),
    };
    ensure!(
        view.shipping == Some(expected),
        "unexpected shipping {:?}",
        view.shipping
    );
    Ok(())
}

#[then("shipping is empty")]
fn shipping_is_empty(transform_context: &TransformContext) -> Result<()> {
    let view = customer_view(transform_context)?;
    ensure!(view.shipping.is_none(), "unexpected shipping {:?}", view.shipping);
    Ok(())
}

#[then("the call fails because the source is not transformable")]
fn not_transformable(transform_context: &TransformContext) -> Result<()> {
    let result = transform_context
        .labelled_result
        .take()
        .ok_or_else(|| anyhow!("transform result unavailable"))?;
    let err = result
        .err()
        .ok_or_else(|| anyhow!("expected the transform to fail"))?;
    ensure!(
        matches!(err, TransformError::NotTransformable { type_name: "IdOnly" }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[then("the batch is rejected as an invalid rule entry")]
fn batch_rejected(transform_context: &TransformContext) -> Result<()> {
    let outcome = transform_context
        .registration
        .take()
        .ok_or_else(|| anyhow!("registration outcome unavailable"))?;
    let err = outcome
        .err()
        .ok_or_else(|| anyhow!("expected the batch to be rejected"))?;
    ensure!(
        matches!(&err, TransformError::InvalidRuleEntry { key, .. } if key == "not a field"),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[then("the composed rules are unchanged")]
fn composed_unchanged(transform_context: &TransformContext) -> Result<()> {
    let before = transform_context
        .composed_before
        .take()
        .ok_or_else(|| anyhow!("snapshot unavailable"))?;
    let after = transform_context
        .rules
        .with_ref(Rulebook::composed_rules)
        .ok_or_else(|| anyhow!("rulebook unavailable"))?;
    ensure!(before == after, "composed rules changed: {after:?}");
    ensure!(after.len() == 1, "the type rule must survive");
    Ok(())
}
