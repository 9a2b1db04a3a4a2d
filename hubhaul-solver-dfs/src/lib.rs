//! Exhaustive route search for hubhaul.
//!
//! This crate provides [`ExhaustiveSolver`], the default implementation of the
//! [`Solver`](hubhaul_core::Solver) trait. It enumerates every delivery route
//! from each candidate start center to the hub, prices each segment by the
//! weight carried along it, and keeps the cheapest complete delivery.
//!
//! The search is exact and deterministic: for a given network and order the
//! same delivery is returned every time. It is intended for small graphs; an
//! optional expansion budget turns runaway searches into a typed error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod best;
mod search;
mod solver;

pub use best::{BestRoute, select_best};
pub use solver::{ExhaustiveSolver, ExhaustiveSolverConfig};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
