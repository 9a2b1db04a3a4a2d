//! Immutable bundle of graph, catalog and tariff handed to solvers.

use thiserror::Error;

use crate::{Catalog, CatalogError, Graph, GraphError, LocationId, ProductId, Tariff, TariffError};

/// Errors returned by [`Network::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// The graph was invalid.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The catalog was invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The tariff was invalid.
    #[error(transparent)]
    Tariff(#[from] TariffError),
    /// A product names a center missing from the graph.
    #[error("product {product} is stocked at {center}, which is not in the graph")]
    UnknownCenter {
        /// Offending product.
        product: ProductId,
        /// Center named by the product.
        center: LocationId,
    },
    /// A product is stocked at the hub rather than a center.
    #[error("product {product} is stocked at the hub {hub}")]
    ProductAtHub {
        /// Offending product.
        product: ProductId,
        /// The hub identifier.
        hub: LocationId,
    },
}

/// Read-only configuration shared by every solve.
///
/// # Examples
/// ```
/// use hubhaul_core::{Catalog, Graph, LocationId, Network, Product, ProductId, Tariff};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = Graph::from_edges(LocationId::from("L1"), [("C1".into(), "L1".into(), 3.0)])?;
/// let catalog = Catalog::new([(ProductId::from("A"), Product::new("C1", 3.0))])?;
/// let network = Network::new(graph, catalog, Tariff::default())?;
/// assert_eq!(network.graph().hub().as_str(), "L1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    graph: Graph,
    catalog: Catalog,
    tariff: Tariff,
}

impl Network {
    /// Cross-check the catalog against the graph and build the bundle.
    pub fn new(graph: Graph, catalog: Catalog, tariff: Tariff) -> Result<Self, NetworkError> {
        for (product, entry) in catalog.iter() {
            if graph.index_of(&entry.center).is_none() {
                return Err(NetworkError::UnknownCenter {
                    product: product.clone(),
                    center: entry.center.clone(),
                });
            }
            if graph.is_hub(&entry.center) {
                return Err(NetworkError::ProductAtHub {
                    product: product.clone(),
                    hub: graph.hub().clone(),
                });
            }
        }
        Ok(Self {
            graph,
            catalog,
            tariff,
        })
    }

    /// Location graph.
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Product catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cost-per-distance schedule.
    pub const fn tariff(&self) -> &Tariff {
        &self.tariff
    }
}
