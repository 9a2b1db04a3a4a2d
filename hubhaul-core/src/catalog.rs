//! Product catalog: which center stocks a product and what one unit weighs.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{LocationId, ProductId};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Center stocking the product.
    pub center: LocationId,
    /// Weight of a single unit.
    pub weight: f64,
}

impl Product {
    /// Construct a catalog entry.
    pub fn new(center: impl Into<LocationId>, weight: f64) -> Self {
        Self {
            center: center.into(),
            weight,
        }
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A unit weight was zero, negative, NaN or infinite.
    #[error("product {product} must have a positive finite weight, found {weight}")]
    InvalidWeight {
        /// Offending product.
        product: ProductId,
        /// Rejected weight.
        weight: f64,
    },
    /// A product was listed twice.
    #[error("product {product} is listed more than once")]
    DuplicateProduct {
        /// Repeated product.
        product: ProductId,
    },
}

/// Mapping from product identifier to owning center and unit weight.
///
/// # Examples
/// ```
/// use hubhaul_core::{Catalog, Product, ProductId};
///
/// # fn main() -> Result<(), hubhaul_core::CatalogError> {
/// let catalog = Catalog::new([(ProductId::from("A"), Product::new("C1", 3.0))])?;
/// let entry = catalog.get(&"A".into()).map(|product| product.center.as_str());
/// assert_eq!(entry, Some("C1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Validate and construct a catalog.
    pub fn new<I>(products: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (ProductId, Product)>,
    {
        let mut entries = BTreeMap::new();
        for (id, product) in products {
            if !product.weight.is_finite() || product.weight <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    product: id,
                    weight: product.weight,
                });
            }
            if entries.contains_key(&id) {
                return Err(CatalogError::DuplicateProduct { product: id });
            }
            entries.insert(id, product);
        }
        Ok(Self { products: entries })
    }

    /// Look up a product.
    pub fn get(&self, product: &ProductId) -> Option<&Product> {
        self.products.get(product)
    }

    /// Whether the catalog lists `product`.
    pub fn contains(&self, product: &ProductId) -> bool {
        self.products.contains_key(product)
    }

    /// Iterate over entries ordered by product id.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Product)> + '_ {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
