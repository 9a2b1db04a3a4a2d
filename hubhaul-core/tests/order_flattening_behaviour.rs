//! Behavioural tests for order flattening using rstest-bdd.

use std::cell::RefCell;

use hubhaul_core::test_support::regional_network;
use hubhaul_core::{
    Catalog, Item, LocationId, OrderError, OrderPolicy, OrderRequest, ProductId,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct OrderWorld {
    catalog: RefCell<Catalog>,
    order: RefCell<OrderRequest>,
    outcome: RefCell<Option<Result<Vec<Item>, OrderError>>>,
}

impl OrderWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Vec<Item>, OrderError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    fn flatten(&self, policy: OrderPolicy) {
        let outcome = self
            .order
            .borrow()
            .flatten(&self.catalog.borrow(), policy);
        self.outcome.replace(Some(outcome));
    }
}

#[fixture]
fn world() -> OrderWorld {
    OrderWorld::default()
}

#[given("the regional catalog")]
fn given_regional_catalog(world: &OrderWorld) {
    world.catalog.replace(regional_network().catalog().clone());
}

#[given("an order for two units of A and one unit of G")]
fn given_mixed_order(world: &OrderWorld) {
    world
        .order
        .replace(OrderRequest::new().with_quantity("A", 2).with_quantity("G", 1));
}

#[given("an order naming only an unknown product")]
fn given_unknown_order(world: &OrderWorld) {
    world
        .order
        .replace(OrderRequest::new().with_quantity("ZZ", 3));
}

#[given("an order with a zero quantity for A")]
fn given_zero_quantity_order(world: &OrderWorld) {
    world.order.replace(OrderRequest::new().with_quantity("A", 0));
}

#[when("the order is flattened leniently")]
fn when_flattened_leniently(world: &OrderWorld) {
    world.flatten(OrderPolicy::Lenient);
}

#[when("the order is flattened strictly")]
fn when_flattened_strictly(world: &OrderWorld) {
    world.flatten(OrderPolicy::Strict);
}

#[then("three items are produced")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_three_items(world: &OrderWorld) {
    let items = world.expect_outcome().expect("expected flattened items");
    assert_eq!(items.len(), 3);
}

#[then("no items are produced")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_no_items(world: &OrderWorld) {
    let items = world.expect_outcome().expect("expected flattened items");
    assert!(items.is_empty());
}

#[then("the candidate starts are C1 then C3")]
fn then_starts_c1_c3(world: &OrderWorld) {
    let starts = world
        .order
        .borrow()
        .candidate_starts(&world.catalog.borrow());
    assert_eq!(starts, vec![LocationId::from("C1"), LocationId::from("C3")]);
}

#[then("there are no candidate starts")]
fn then_no_starts(world: &OrderWorld) {
    let starts = world
        .order
        .borrow()
        .candidate_starts(&world.catalog.borrow());
    assert!(starts.is_empty());
}

#[then("flattening fails with an unknown product error")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_unknown_product(world: &OrderWorld) {
    let err = world.expect_outcome().expect_err("expected rejection");
    assert_eq!(
        err,
        OrderError::UnknownProduct {
            product: ProductId::from("ZZ")
        }
    );
}

#[then("flattening fails with a non-positive quantity error")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_non_positive_quantity(world: &OrderWorld) {
    let err = world.expect_outcome().expect_err("expected rejection");
    assert!(matches!(err, OrderError::NonPositiveQuantity { quantity: 0, .. }));
}

#[scenario(path = "tests/features/order_flattening.feature", index = 0)]
fn known_products_expand(world: OrderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/order_flattening.feature", index = 1)]
fn lenient_drops_unknown(world: OrderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/order_flattening.feature", index = 2)]
fn strict_rejects_unknown(world: OrderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/order_flattening.feature", index = 3)]
fn strict_rejects_zero_quantity(world: OrderWorld) {
    let _ = world;
}
