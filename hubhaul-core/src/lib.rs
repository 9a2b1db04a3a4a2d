//! Core domain types for the hubhaul delivery planner.
//!
//! A [`Network`] bundles the static location [`Graph`], the product
//! [`Catalog`] and the weight-tiered [`Tariff`]. An [`OrderRequest`] is
//! flattened into unit [`Item`]s, and a [`Solver`] turns it into the cheapest
//! complete [`Delivery`] from a start center to the hub.
//!
//! Constructors validate their input and return `Result` so that malformed
//! configuration is caught before any search runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod delivery;
mod graph;
mod ids;
mod network;
mod order;
mod solver;
mod tariff;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError, Product};
pub use delivery::{Delivery, DeliveryReport, Segment, SegmentReport};
pub use graph::{Edge, Graph, GraphError, MAX_LOCATIONS};
pub use ids::{LocationId, ProductId};
pub use network::{Network, NetworkError};
pub use order::{
    Item, MAX_LINE_QUANTITY, OrderError, OrderPolicy, OrderRequest, ParseOrderPolicyError,
};
pub use solver::{Diagnostics, SolveError, SolveResponse, Solver};
pub use tariff::{Tariff, TariffError};
