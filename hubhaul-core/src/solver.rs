//! The solver boundary: order in, cheapest delivery out.

use std::time::Duration;

use thiserror::Error;

use crate::{Delivery, OrderError, OrderRequest, TariffError};

/// Counters describing how a solve went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Number of start centers searched.
    pub starts_searched: usize,
    /// Number of search states expanded across all starts.
    pub states_expanded: u64,
    /// Number of complete deliveries encountered.
    pub candidates_found: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResponse {
    /// The cheapest complete delivery.
    pub delivery: Delivery,
    /// Search counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The search produced no complete delivery, e.g. for an empty order.
    #[error("no valid delivery path found")]
    NoRouteFound,
    /// The order failed strict validation.
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderError),
    /// The tariff rejected an onboard weight.
    #[error("cost calculation failed: {0}")]
    Tariff(#[from] TariffError),
    /// The search expanded more states than the configured budget allows.
    #[error("search exceeded its budget of {limit} expanded states")]
    SearchBudgetExhausted {
        /// Configured expansion budget.
        limit: u64,
    },
}

/// Find the cheapest delivery for an order.
///
/// Implementations return [`SolveError::NoRouteFound`] rather than a partial
/// route when nothing completes. Solvers must be `Send + Sync` so one
/// instance can serve concurrent callers over shared, read-only
/// configuration.
pub trait Solver: Send + Sync {
    /// Solve an order, producing the winning delivery or an error.
    fn solve(&self, order: &OrderRequest) -> Result<SolveResponse, SolveError>;
}
