//! Fixture networks shared by unit, behaviour and property tests.

use std::collections::BTreeMap;

use crate::{Catalog, Graph, Item, LocationId, Network, Product, ProductId, Tariff};

/// Hub of the fixture networks.
pub const HUB: &str = "L1";

/// Adjacency of the regional network; neighbour order fixes exploration order.
const REGIONAL_DISTANCES: &[(&str, &[(&str, f64)])] = &[
    ("C1", &[("C2", 4.0), ("L1", 3.0)]),
    ("C2", &[("C1", 4.0), ("L1", 2.5), ("C3", 3.0)]),
    ("C3", &[("L1", 2.0), ("C2", 3.0)]),
    ("L1", &[("C1", 3.0), ("C2", 2.5), ("C3", 2.0)]),
];

/// Products of the regional network: `(id, center, unit weight)`.
const REGIONAL_PRODUCTS: &[(&str, &str, f64)] = &[
    ("A", "C1", 3.0),
    ("B", "C1", 2.0),
    ("C", "C1", 8.0),
    ("D", "C2", 12.0),
    ("E", "C2", 25.0),
    ("F", "C2", 15.0),
    ("G", "C3", 0.5),
    ("H", "C3", 1.0),
    ("I", "C3", 2.0),
];

/// Three centers and a hub with nine products and the default tariff.
pub fn regional_network() -> Network {
    network_with_products(REGIONAL_PRODUCTS)
}

/// The regional graph stocked with one unit-weight product per center:
/// `P1` at `C1`, `P2` at `C2` and `P3` at `C3`.
pub fn light_network() -> Network {
    network_with_products(&[("P1", "C1", 1.0), ("P2", "C2", 1.0), ("P3", "C3", 1.0)])
}

/// The regional graph stocked with the given `(id, center, weight)` rows.
#[expect(
    clippy::expect_used,
    reason = "fixture tables are static and known to be valid"
)]
pub fn network_with_products(products: &[(&str, &str, f64)]) -> Network {
    let graph = Graph::from_adjacency(
        LocationId::from(HUB),
        REGIONAL_DISTANCES.iter().map(|(from, neighbours)| {
            (
                LocationId::from(*from),
                neighbours
                    .iter()
                    .map(|(to, distance)| (LocationId::from(*to), *distance)),
            )
        }),
    )
    .expect("regional graph is symmetric");
    let catalog = Catalog::new(
        products
            .iter()
            .map(|(id, center, weight)| (ProductId::from(*id), Product::new(*center, *weight))),
    )
    .expect("fixture catalog is valid");
    Network::new(graph, catalog, Tariff::default()).expect("fixture network is consistent")
}

/// Count items per product, for comparing item multisets.
pub fn item_counts(items: &[Item]) -> BTreeMap<ProductId, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.product.clone()).or_insert(0) += 1;
    }
    counts
}
