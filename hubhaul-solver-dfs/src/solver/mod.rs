//! `ExhaustiveSolver` implementation.

use std::time::Instant;

use hubhaul_core::{
    Delivery, Diagnostics, Item, LocationId, Network, OrderPolicy, OrderRequest, SolveError,
    SolveResponse, Solver,
};
use log::{debug, info};

use crate::BestRoute;
use crate::search::{ExpansionBudget, SearchInstance};

/// Configuration for [`ExhaustiveSolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSolverConfig {
    /// How order lines the catalog cannot satisfy are treated.
    pub policy: OrderPolicy,
    /// Upper bound on expanded search states across all starts. `None`
    /// searches without limit.
    pub max_expansions: Option<u64>,
}

/// Counters gathered while exploring every start.
#[derive(Debug, Clone, Copy, Default)]
struct SearchSummary {
    starts: usize,
    expanded: u64,
    candidates: u64,
}

/// Solver that enumerates every delivery route and keeps the cheapest.
///
/// The search starts once from each distinct center holding requested cargo
/// and walks the graph depth first. A transition `(from, to, onboard cargo)`
/// already taken earlier on the current path is not repeated, which bounds
/// every path while still allowing the hub to be revisited between pickups.
///
/// # Examples
/// ```
/// use hubhaul_core::{OrderRequest, Solver};
/// use hubhaul_core::test_support::regional_network;
/// use hubhaul_solver_dfs::ExhaustiveSolver;
///
/// let solver = ExhaustiveSolver::new(regional_network());
/// let order = OrderRequest::new().with_quantity("G", 1);
/// let response = solver.solve(&order).expect("route exists");
/// assert_eq!(response.delivery.report().minimum_cost, 20);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    network: Network,
    config: ExhaustiveSolverConfig,
}

impl ExhaustiveSolver {
    /// Construct a solver using default configuration.
    pub fn new(network: Network) -> Self {
        Self::with_config(network, ExhaustiveSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(network: Network, config: ExhaustiveSolverConfig) -> Self {
        Self { network, config }
    }

    /// The network this solver searches.
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Active configuration.
    pub const fn config(&self) -> &ExhaustiveSolverConfig {
        &self.config
    }

    /// Every complete delivery for `order`, in discovery order.
    ///
    /// Discovery order is deterministic: starts in product-id order, then
    /// neighbours in graph declaration order.
    pub fn candidates(&self, order: &OrderRequest) -> Result<Vec<Delivery>, SolveError> {
        let (items, starts) = self.prepare(order)?;
        let mut found = Vec::new();
        self.search(&items, &starts, |delivery| found.push(delivery))?;
        Ok(found)
    }

    fn prepare(&self, order: &OrderRequest) -> Result<(Vec<Item>, Vec<LocationId>), SolveError> {
        let catalog = self.network.catalog();
        let items = order.flatten(catalog, self.config.policy)?;
        let starts = order.candidate_starts(catalog);
        debug!(
            "order flattened to {} items across {} start centers",
            items.len(),
            starts.len()
        );
        Ok((items, starts))
    }

    fn search<F>(
        &self,
        items: &[Item],
        starts: &[LocationId],
        mut on_delivery: F,
    ) -> Result<SearchSummary, SolveError>
    where
        F: FnMut(Delivery),
    {
        let instance = SearchInstance::new(&self.network, items);
        let mut budget = ExpansionBudget::new(self.config.max_expansions);
        let mut candidates = 0_u64;
        for start in starts {
            let found = instance.explore(start, &mut budget, &mut on_delivery)?;
            debug!("start {start}: {found} complete deliveries");
            candidates = candidates.saturating_add(found);
        }
        Ok(SearchSummary {
            starts: starts.len(),
            expanded: budget.expanded(),
            candidates,
        })
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(&self, order: &OrderRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let (items, starts) = self.prepare(order)?;
        if starts.is_empty() {
            debug!("order has no deliverable lines");
            return Err(SolveError::NoRouteFound);
        }

        let mut best = BestRoute::default();
        let summary = self.search(&items, &starts, |delivery| best.offer(delivery))?;
        let delivery = best.into_best().ok_or(SolveError::NoRouteFound)?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            starts_searched: summary.starts,
            states_expanded: summary.expanded,
            candidates_found: summary.candidates,
        };
        info!(
            "best delivery costs {:.2} over {} stops ({} candidates, {} states, {:?})",
            delivery.total_cost,
            delivery.path.len(),
            diagnostics.candidates_found,
            diagnostics.states_expanded,
            diagnostics.solve_time
        );
        Ok(SolveResponse {
            delivery,
            diagnostics,
        })
    }
}
