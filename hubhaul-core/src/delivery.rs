//! Completed delivery routes and their reported form.

use crate::{Item, LocationId};

/// One traversed edge of a delivery route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Location the vehicle leaves.
    pub from: LocationId,
    /// Location the vehicle arrives at.
    pub to: LocationId,
    /// Weight onboard while travelling, before any pickup or drop at `to`.
    pub weight: f64,
    /// Edge distance.
    pub distance: f64,
    /// Rate for `weight` multiplied by `distance`.
    pub cost: f64,
}

/// A complete route from a start center to the hub with every item dropped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    /// Visited locations, starting at a center and ending at the hub.
    pub path: Vec<LocationId>,
    /// Sum of segment costs.
    pub total_cost: f64,
    /// Per-segment cost log in travel order.
    pub segments: Vec<Segment>,
    /// Items in the order they were dropped at the hub.
    pub delivered: Vec<Item>,
}

impl Delivery {
    /// The center the route starts from.
    pub fn start(&self) -> Option<&LocationId> {
        self.path.first()
    }

    /// Summarise the route with costs rounded to whole currency units.
    ///
    /// # Examples
    /// ```
    /// use hubhaul_core::{Delivery, LocationId, Segment};
    ///
    /// let delivery = Delivery {
    ///     path: vec![LocationId::from("C2"), LocationId::from("L1")],
    ///     total_cost: 65.0,
    ///     segments: vec![Segment {
    ///         from: LocationId::from("C2"),
    ///         to: LocationId::from("L1"),
    ///         weight: 12.0,
    ///         distance: 2.5,
    ///         cost: 65.0,
    ///     }],
    ///     delivered: Vec::new(),
    /// };
    /// let report = delivery.report();
    /// assert_eq!(report.minimum_cost, 65);
    /// assert_eq!(report.breakdown[0].segment_cost, 65);
    /// ```
    pub fn report(&self) -> DeliveryReport {
        DeliveryReport {
            minimum_cost: round_currency(self.total_cost),
            path: self.path.clone(),
            breakdown: self
                .segments
                .iter()
                .map(|segment| SegmentReport {
                    from: segment.from.clone(),
                    to: segment.to.clone(),
                    weight: segment.weight,
                    distance: segment.distance,
                    segment_cost: round_currency(segment.cost),
                })
                .collect(),
        }
    }
}

/// Response envelope for a winning delivery.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryReport {
    /// Total cost rounded to the nearest unit.
    pub minimum_cost: i64,
    /// Visited locations.
    pub path: Vec<LocationId>,
    /// Per-segment summary.
    pub breakdown: Vec<SegmentReport>,
}

/// Reported form of a [`Segment`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentReport {
    /// Location the vehicle leaves.
    pub from: LocationId,
    /// Location the vehicle arrives at.
    pub to: LocationId,
    /// Weight onboard while travelling.
    pub weight: f64,
    /// Edge distance.
    pub distance: f64,
    /// Segment cost rounded to the nearest unit.
    pub segment_cost: i64,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "costs are bounded by the small route; `as` saturates on overflow"
)]
fn round_currency(cost: f64) -> i64 {
    cost.round() as i64
}
