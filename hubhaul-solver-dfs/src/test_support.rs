//! Test-only utilities for `hubhaul-solver-dfs`.
//!
//! The helpers in this module are available to unit tests, behavioural tests
//! and benchmarks. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use std::collections::BTreeMap;

use hubhaul_core::{Item, LocationId, Network, OrderRequest};

/// Build an order from `(product, quantity)` rows.
///
/// # Examples
/// ```rust
/// use hubhaul_core::ProductId;
/// use hubhaul_solver_dfs::test_support::order;
///
/// let order = order(&[("A", 2), ("G", 1)]);
/// assert_eq!(order.quantity(&ProductId::from("A")), Some(2));
/// ```
#[must_use]
pub fn order(lines: &[(&str, i64)]) -> OrderRequest {
    lines
        .iter()
        .map(|(product, quantity)| (*product, *quantity))
        .collect()
}

/// Replay a path and report the weight onboard before each move.
///
/// Cargo at a location is loaded in full on arrival (or at the start) and
/// everything onboard is unloaded on arrival at the hub. The result has one
/// entry per path segment, for checking a delivery's logged weights without
/// trusting the solver's own bookkeeping.
#[expect(
    clippy::float_arithmetic,
    reason = "weights are real-valued catalog quantities"
)]
pub fn replay_weights(network: &Network, items: &[Item], path: &[LocationId]) -> Vec<f64> {
    let hub = network.graph().hub();
    let mut waiting: BTreeMap<&LocationId, f64> = BTreeMap::new();
    for item in items {
        *waiting.entry(&item.center).or_insert(0.0) += item.weight;
    }

    let mut stops = path.iter();
    let mut onboard = stops
        .next()
        .and_then(|start| waiting.remove(start))
        .unwrap_or(0.0);
    let mut weights = Vec::with_capacity(path.len().saturating_sub(1));
    for stop in stops {
        weights.push(onboard);
        if stop == hub {
            onboard = 0.0;
        } else if let Some(load) = waiting.remove(stop) {
            onboard += load;
        }
    }
    weights
}
