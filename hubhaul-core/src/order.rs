//! Orders and their expansion into unit items.
//!
//! An [`OrderRequest`] maps products to requested quantities. Flattening
//! turns it into one [`Item`] per unit, tagged with the center that stocks it
//! and its weight. How unknown products and non-positive quantities are
//! treated is chosen by [`OrderPolicy`]. Quantities above
//! [`MAX_LINE_QUANTITY`] are rejected under every policy.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::{Catalog, LocationId, ProductId};

/// Largest quantity a single order line may request.
pub const MAX_LINE_QUANTITY: i64 = 10_000;

/// Treatment of order lines the catalog cannot satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrderPolicy {
    /// Skip unknown products and non-positive quantities, logging each one.
    #[default]
    Lenient,
    /// Reject the order on the first unknown product or non-positive
    /// quantity.
    Strict,
}

impl OrderPolicy {
    /// Lowercase name of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`OrderPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order policy '{value}' (expected 'strict' or 'lenient')")]
pub struct ParseOrderPolicyError {
    /// Text that failed to parse.
    pub value: String,
}

impl FromStr for OrderPolicy {
    type Err = ParseOrderPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseOrderPolicyError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Errors raised by strict order validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The product is not in the catalog.
    #[error("product {product} is not in the catalog")]
    UnknownProduct {
        /// Offending product.
        product: ProductId,
    },
    /// The requested quantity was zero or negative.
    #[error("quantity for product {product} must be positive, found {quantity}")]
    NonPositiveQuantity {
        /// Offending product.
        product: ProductId,
        /// Rejected quantity.
        quantity: i64,
    },
    /// The requested quantity exceeds [`MAX_LINE_QUANTITY`].
    #[error("quantity for product {product} is {quantity}, above the limit of {limit}")]
    QuantityTooLarge {
        /// Offending product.
        product: ProductId,
        /// Rejected quantity.
        quantity: i64,
        /// Largest accepted quantity.
        limit: i64,
    },
}

/// One unit of a product awaiting delivery.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Product this unit belongs to.
    pub product: ProductId,
    /// Center the unit is picked up from.
    pub center: LocationId,
    /// Unit weight.
    pub weight: f64,
}

/// Requested quantity per product.
///
/// Quantities are signed so that malformed requests survive parsing and can
/// be reported (or skipped) by flattening.
///
/// # Examples
/// ```
/// use hubhaul_core::{Catalog, LocationId, OrderPolicy, OrderRequest, Product, ProductId};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new([(ProductId::from("A"), Product::new("C1", 3.0))])?;
/// let order = OrderRequest::new().with_quantity("A", 2);
/// let items = order.flatten(&catalog, OrderPolicy::Strict)?;
/// assert_eq!(items.len(), 2);
/// assert_eq!(order.candidate_starts(&catalog), vec![LocationId::from("C1")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderRequest {
    quantities: BTreeMap<ProductId, i64>,
}

impl OrderRequest {
    /// An empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for `product`, replacing any previous value.
    #[must_use]
    pub fn with_quantity(mut self, product: impl Into<ProductId>, quantity: i64) -> Self {
        self.quantities.insert(product.into(), quantity);
        self
    }

    /// Requested quantity for `product`.
    pub fn quantity(&self, product: &ProductId) -> Option<i64> {
        self.quantities.get(product).copied()
    }

    /// Order lines ordered by product id.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, i64)> + '_ {
        self.quantities
            .iter()
            .map(|(product, quantity)| (product, *quantity))
    }

    /// Whether the order has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Check every line against the catalog under `policy`.
    ///
    /// Lenient validation only rejects quantities above
    /// [`MAX_LINE_QUANTITY`].
    pub fn validate(&self, catalog: &Catalog, policy: OrderPolicy) -> Result<(), OrderError> {
        for (product, quantity) in self.iter() {
            if quantity > MAX_LINE_QUANTITY {
                return Err(OrderError::QuantityTooLarge {
                    product: product.clone(),
                    quantity,
                    limit: MAX_LINE_QUANTITY,
                });
            }
        }
        if policy == OrderPolicy::Lenient {
            return Ok(());
        }
        for (product, quantity) in self.iter() {
            if !catalog.contains(product) {
                return Err(OrderError::UnknownProduct {
                    product: product.clone(),
                });
            }
            if quantity <= 0 {
                return Err(OrderError::NonPositiveQuantity {
                    product: product.clone(),
                    quantity,
                });
            }
        }
        Ok(())
    }

    /// Expand the order into one [`Item`] per requested unit.
    ///
    /// Items appear grouped by product in product-id order; the order is not
    /// otherwise significant.
    pub fn flatten(&self, catalog: &Catalog, policy: OrderPolicy) -> Result<Vec<Item>, OrderError> {
        self.validate(catalog, policy)?;
        let mut items = Vec::new();
        for (product, quantity) in self.iter() {
            let Some(entry) = catalog.get(product) else {
                warn!("dropping order line for unknown product {product}");
                continue;
            };
            if quantity <= 0 {
                warn!("dropping order line for {product} with quantity {quantity}");
                continue;
            }
            for _ in 0..quantity {
                items.push(Item {
                    product: product.clone(),
                    center: entry.center.clone(),
                    weight: entry.weight,
                });
            }
        }
        Ok(items)
    }

    /// Distinct centers holding requested cargo, in order of first
    /// appearance by product id.
    ///
    /// Only known products with a positive quantity contribute. An empty
    /// result means there is nowhere to start a route.
    pub fn candidate_starts(&self, catalog: &Catalog) -> Vec<LocationId> {
        let mut starts: Vec<LocationId> = Vec::new();
        for (product, quantity) in self.iter() {
            if quantity <= 0 {
                continue;
            }
            if let Some(entry) = catalog.get(product)
                && !starts.contains(&entry.center)
            {
                starts.push(entry.center.clone());
            }
        }
        starts
    }
}

impl<P> FromIterator<(P, i64)> for OrderRequest
where
    P: Into<ProductId>,
{
    fn from_iter<I: IntoIterator<Item = (P, i64)>>(iter: I) -> Self {
        Self {
            quantities: iter
                .into_iter()
                .map(|(product, quantity)| (product.into(), quantity))
                .collect(),
        }
    }
}
