//! Selection of the cheapest complete delivery.

use hubhaul_core::Delivery;

/// Running minimum over candidate deliveries.
///
/// A candidate replaces the current best only when it is strictly cheaper,
/// so among equal-cost deliveries the first one offered wins.
///
/// # Examples
/// ```
/// use hubhaul_core::Delivery;
/// use hubhaul_solver_dfs::BestRoute;
///
/// fn delivery(cost: f64) -> Delivery {
///     Delivery { path: Vec::new(), total_cost: cost, segments: Vec::new(), delivered: Vec::new() }
/// }
///
/// let mut best = BestRoute::default();
/// best.offer(delivery(90.0));
/// best.offer(delivery(70.0));
/// best.offer(delivery(80.0));
/// assert_eq!(best.best().map(|d| d.total_cost), Some(70.0));
/// assert_eq!(best.offered(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BestRoute {
    best: Option<Delivery>,
    offered: u64,
}

impl BestRoute {
    /// Consider `candidate`, keeping it if it beats the current best.
    pub fn offer(&mut self, candidate: Delivery) {
        self.offered = self.offered.saturating_add(1);
        let improves = self
            .best
            .as_ref()
            .is_none_or(|current| candidate.total_cost < current.total_cost);
        if improves {
            self.best = Some(candidate);
        }
    }

    /// The cheapest delivery seen so far.
    pub const fn best(&self) -> Option<&Delivery> {
        self.best.as_ref()
    }

    /// Number of candidates offered.
    pub const fn offered(&self) -> u64 {
        self.offered
    }

    /// Consume the accumulator, returning the winner.
    pub fn into_best(self) -> Option<Delivery> {
        self.best
    }
}

/// Pick the minimum-cost delivery, or `None` when there are no candidates.
pub fn select_best<I>(candidates: I) -> Option<Delivery>
where
    I: IntoIterator<Item = Delivery>,
{
    let mut best = BestRoute::default();
    for candidate in candidates {
        best.offer(candidate);
    }
    best.into_best()
}
