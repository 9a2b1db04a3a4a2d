//! Exhaustive depth-first exploration of delivery routes.
//!
//! Cargo is tracked per source location: pickup at a center is
//! all-or-nothing and every product belongs to exactly one center, so the set
//! of centers whose cargo is onboard determines the onboard product list.
//! Onboard and remaining cargo are therefore 64-bit location masks.
//!
//! The explorer keeps a single set of path, segment, drop and visited
//! stacks. Each transition pushes onto them before descending and pops on
//! return, so a branch only ever sees the state of its own path.

use std::collections::HashSet;

use hubhaul_core::{Delivery, Item, LocationId, Network, Segment, SolveError};
use log::warn;

/// Counts expanded states against an optional limit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExpansionBudget {
    limit: Option<u64>,
    expanded: u64,
}

impl ExpansionBudget {
    pub(crate) const fn new(limit: Option<u64>) -> Self {
        Self { limit, expanded: 0 }
    }

    pub(crate) const fn expanded(&self) -> u64 {
        self.expanded
    }

    fn charge(&mut self) -> Result<(), SolveError> {
        self.expanded = self.expanded.saturating_add(1);
        match self.limit {
            Some(limit) if self.expanded > limit => {
                Err(SolveError::SearchBudgetExhausted { limit })
            }
            _ => Ok(()),
        }
    }
}

/// Items of one order grouped by the location they are picked up from.
pub(crate) struct SearchInstance<'a> {
    network: &'a Network,
    loads: Vec<Vec<Item>>,
    load_weights: Vec<f64>,
    pending: u64,
}

impl<'a> SearchInstance<'a> {
    pub(crate) fn new(network: &'a Network, items: &[Item]) -> Self {
        let graph = network.graph();
        let mut loads: Vec<Vec<Item>> = vec![Vec::new(); graph.len()];
        for item in items {
            let slot = graph
                .index_of(&item.center)
                .and_then(|index| loads.get_mut(index));
            if let Some(load) = slot {
                load.push(item.clone());
            } else {
                warn!(
                    "item {} references center {} outside the graph; ignoring it",
                    item.product, item.center
                );
            }
        }
        let load_weights = loads.iter().map(|load| total_weight(load)).collect();
        let pending = loads
            .iter()
            .enumerate()
            .filter(|(_, load)| !load.is_empty())
            .fold(0, |mask, (index, _)| mask | location_bit(index));
        Self {
            network,
            loads,
            load_weights,
            pending,
        }
    }

    /// Explore every route starting at `start`, passing each complete
    /// delivery to `on_delivery`. Returns the number of deliveries found.
    pub(crate) fn explore<F>(
        &self,
        start: &LocationId,
        budget: &mut ExpansionBudget,
        on_delivery: F,
    ) -> Result<u64, SolveError>
    where
        F: FnMut(Delivery),
    {
        let Some(start_index) = self.network.graph().index_of(start) else {
            warn!("start {start} is not in the graph; skipping");
            return Ok(0);
        };
        let onboard = self.pending & location_bit(start_index);
        let remaining = self.pending & !onboard;

        let mut explorer = Explorer {
            instance: self,
            path: vec![start_index],
            legs: Vec::new(),
            drops: Vec::new(),
            visited: HashSet::new(),
            budget,
            on_delivery,
            found: 0,
        };
        explorer.descend(start_index, onboard, remaining, 0.0)?;
        Ok(explorer.found)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "weights are real-valued catalog quantities"
    )]
    fn onboard_weight(&self, onboard: u64) -> f64 {
        self.load_weights
            .iter()
            .enumerate()
            .filter(|(index, _)| onboard & location_bit(*index) != 0)
            .map(|(_, weight)| *weight)
            .sum()
    }

    fn items_in(&self, mask: u64) -> impl Iterator<Item = &Item> + '_ {
        self.loads
            .iter()
            .enumerate()
            .filter(move |(index, _)| mask & location_bit(*index) != 0)
            .flat_map(|(_, load)| load.iter())
    }

    fn label(&self, index: usize) -> LocationId {
        self.network
            .graph()
            .location(index)
            .cloned()
            .unwrap_or_else(|| LocationId::new(format!("#{index}")))
    }
}

/// Transition key: the edge taken and the cargo carried along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Signature {
    from: usize,
    to: usize,
    onboard: u64,
}

#[derive(Debug, Clone, Copy)]
struct Leg {
    from: usize,
    to: usize,
    weight: f64,
    distance: f64,
    cost: f64,
}

struct Explorer<'s, 'a, F> {
    instance: &'s SearchInstance<'a>,
    path: Vec<usize>,
    legs: Vec<Leg>,
    drops: Vec<u64>,
    visited: HashSet<Signature>,
    budget: &'s mut ExpansionBudget,
    on_delivery: F,
    found: u64,
}

impl<F> Explorer<'_, '_, F>
where
    F: FnMut(Delivery),
{
    #[expect(
        clippy::float_arithmetic,
        reason = "segment costs are rate times real-valued distance"
    )]
    fn descend(
        &mut self,
        location: usize,
        onboard: u64,
        remaining: u64,
        cost: f64,
    ) -> Result<(), SolveError> {
        self.budget.charge()?;
        let instance = self.instance;
        let graph = instance.network.graph();
        let hub = graph.hub_index();
        if remaining == 0 && onboard == 0 && location == hub {
            self.emit(cost);
            return Ok(());
        }

        let carried = instance.onboard_weight(onboard);
        let rate = instance.network.tariff().rate(carried)?;
        for &edge in graph.edges(location) {
            let signature = Signature {
                from: location,
                to: edge.to,
                onboard,
            };
            if !self.visited.insert(signature) {
                continue;
            }

            let mut next_onboard = onboard;
            let mut next_remaining = remaining;
            if edge.to != hub {
                let picked = remaining & location_bit(edge.to);
                next_remaining &= !picked;
                next_onboard |= picked;
            }
            let dropped = edge.to == hub && next_onboard != 0;
            if dropped {
                self.drops.push(next_onboard);
                next_onboard = 0;
            }

            let segment_cost = rate * edge.distance;
            self.path.push(edge.to);
            self.legs.push(Leg {
                from: location,
                to: edge.to,
                weight: carried,
                distance: edge.distance,
                cost: segment_cost,
            });
            let outcome = self.descend(
                edge.to,
                next_onboard,
                next_remaining,
                cost + segment_cost,
            );
            self.legs.pop();
            self.path.pop();
            if dropped {
                self.drops.pop();
            }
            self.visited.remove(&signature);
            outcome?;
        }
        Ok(())
    }

    fn emit(&mut self, total_cost: f64) {
        let instance = self.instance;
        let delivery = Delivery {
            path: self.path.iter().map(|&index| instance.label(index)).collect(),
            total_cost,
            segments: self
                .legs
                .iter()
                .map(|leg| Segment {
                    from: instance.label(leg.from),
                    to: instance.label(leg.to),
                    weight: leg.weight,
                    distance: leg.distance,
                    cost: leg.cost,
                })
                .collect(),
            delivered: self
                .drops
                .iter()
                .flat_map(|&mask| instance.items_in(mask))
                .cloned()
                .collect(),
        };
        self.found = self.found.saturating_add(1);
        (self.on_delivery)(delivery);
    }
}

fn location_bit(index: usize) -> u64 {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1_u64.checked_shl(shift))
        .unwrap_or(0)
}

#[expect(
    clippy::float_arithmetic,
    reason = "weights are real-valued catalog quantities"
)]
fn total_weight(items: &[Item]) -> f64 {
    items.iter().map(|item| item.weight).sum()
}
