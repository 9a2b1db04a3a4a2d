//! Facade crate for the hubhaul delivery planner.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! solver and the network configuration loader behind feature flags.

#![forbid(unsafe_code)]

pub use hubhaul_core::{
    Catalog, Delivery, DeliveryReport, Diagnostics, Graph, Item, LocationId, Network,
    NetworkError, OrderError, OrderPolicy, OrderRequest, Product, ProductId, Segment,
    SegmentReport, SolveError, SolveResponse, Solver, Tariff,
};

#[cfg(feature = "solver-dfs")]
pub use hubhaul_solver_dfs::{ExhaustiveSolver, ExhaustiveSolverConfig};

#[cfg(feature = "data")]
pub use hubhaul_data::{NetworkLoadError, default_network, load_network, parse_network};
