//! Static location graph: one hub, several centers and symmetric distances.
//!
//! Locations are interned to dense indices so the search engine can treat
//! cargo composition as a location bitmask. Adjacency rows keep their
//! declaration order, which fixes the order in which neighbours are explored.

use std::collections::HashMap;

use thiserror::Error;

use crate::LocationId;

/// Upper bound on graph size; cargo is tracked as a 64-bit location mask.
pub const MAX_LOCATIONS: usize = 64;

/// Directed half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Dense index of the neighbouring location.
    pub to: usize,
    /// Travel distance to the neighbour.
    pub distance: f64,
}

/// Errors returned while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The hub does not appear in the adjacency table.
    #[error("hub {hub} is not a location in the graph")]
    UnknownHub {
        /// Offending hub identifier.
        hub: LocationId,
    },
    /// A location was declared twice.
    #[error("location {location} is declared more than once")]
    DuplicateLocation {
        /// Repeated location.
        location: LocationId,
    },
    /// The same neighbour appears twice in one adjacency row.
    #[error("edge {from} -> {to} is declared more than once")]
    DuplicateEdge {
        /// Edge source.
        from: LocationId,
        /// Edge target.
        to: LocationId,
    },
    /// A location lists itself as a neighbour.
    #[error("location {location} cannot be its own neighbour")]
    SelfLoop {
        /// Offending location.
        location: LocationId,
    },
    /// A distance was zero, negative, NaN or infinite.
    #[error("distance {from} -> {to} must be positive and finite, found {distance}")]
    InvalidDistance {
        /// Edge source.
        from: LocationId,
        /// Edge target.
        to: LocationId,
        /// Rejected distance.
        distance: f64,
    },
    /// An edge has no counterpart in the opposite direction.
    #[error("edge {from} -> {to} is missing")]
    MissingReverseEdge {
        /// Source of the missing edge.
        from: LocationId,
        /// Target of the missing edge.
        to: LocationId,
    },
    /// Forward and reverse distances disagree.
    #[error("distance {from} -> {to} is {forward} but {to} -> {from} is {backward}")]
    AsymmetricDistance {
        /// Edge source.
        from: LocationId,
        /// Edge target.
        to: LocationId,
        /// Distance as declared on `from`.
        forward: f64,
        /// Distance as declared on `to`.
        backward: f64,
    },
    /// More locations than the search can represent.
    #[error("graph has {count} locations; at most 64 are supported")]
    TooManyLocations {
        /// Number of declared locations.
        count: usize,
    },
}

/// Symmetric weighted adjacency among a hub and its centers.
///
/// # Examples
/// ```
/// use hubhaul_core::{Graph, LocationId};
///
/// # fn main() -> Result<(), hubhaul_core::GraphError> {
/// let graph = Graph::from_edges(
///     LocationId::from("L1"),
///     [
///         (LocationId::from("C1"), LocationId::from("L1"), 3.0),
///         (LocationId::from("C1"), LocationId::from("C2"), 4.0),
///     ],
/// )?;
/// assert_eq!(graph.distance(&"L1".into(), &"C1".into()), Some(3.0));
/// assert!(graph.is_hub(&"L1".into()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    locations: Vec<LocationId>,
    index: HashMap<LocationId, usize>,
    adjacency: Vec<Vec<Edge>>,
    hub: usize,
    hub_id: LocationId,
}

impl Graph {
    /// Build a graph from a per-direction adjacency table.
    ///
    /// Every edge must be declared on both endpoints with the same distance.
    pub fn from_adjacency<I, N>(hub: LocationId, adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (LocationId, N)>,
        N: IntoIterator<Item = (LocationId, f64)>,
    {
        let rows: Vec<(LocationId, Vec<(LocationId, f64)>)> = adjacency
            .into_iter()
            .map(|(location, neighbours)| (location, neighbours.into_iter().collect()))
            .collect();

        let mut locations = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        for (location, _) in &rows {
            if index.insert(location.clone(), locations.len()).is_some() {
                return Err(GraphError::DuplicateLocation {
                    location: location.clone(),
                });
            }
            locations.push(location.clone());
        }
        if locations.len() > MAX_LOCATIONS {
            return Err(GraphError::TooManyLocations {
                count: locations.len(),
            });
        }
        let hub_index = index
            .get(&hub)
            .copied()
            .ok_or_else(|| GraphError::UnknownHub { hub: hub.clone() })?;

        let mut adjacency = Vec::with_capacity(rows.len());
        for (from, neighbours) in &rows {
            let mut edges: Vec<Edge> = Vec::with_capacity(neighbours.len());
            for &(ref to, distance) in neighbours {
                if from == to {
                    return Err(GraphError::SelfLoop {
                        location: from.clone(),
                    });
                }
                if !distance.is_finite() || distance <= 0.0 {
                    return Err(GraphError::InvalidDistance {
                        from: from.clone(),
                        to: to.clone(),
                        distance,
                    });
                }
                let Some(&target) = index.get(to) else {
                    return Err(GraphError::MissingReverseEdge {
                        from: to.clone(),
                        to: from.clone(),
                    });
                };
                if edges.iter().any(|edge| edge.to == target) {
                    return Err(GraphError::DuplicateEdge {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
                edges.push(Edge {
                    to: target,
                    distance,
                });
            }
            adjacency.push(edges);
        }

        let graph = Self {
            locations,
            index,
            adjacency,
            hub: hub_index,
            hub_id: hub,
        };
        graph.verify_symmetry()?;
        Ok(graph)
    }

    /// Build a graph from undirected edges, declaring both directions.
    ///
    /// Locations are registered in order of first appearance.
    pub fn from_edges<I>(hub: LocationId, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (LocationId, LocationId, f64)>,
    {
        let mut rows: Vec<(LocationId, Vec<(LocationId, f64)>)> = Vec::new();
        for (a, b, distance) in edges {
            push_neighbour(&mut rows, a.clone(), b.clone(), distance);
            push_neighbour(&mut rows, b, a, distance);
        }
        Self::from_adjacency(hub, rows)
    }

    #[expect(
        clippy::float_cmp,
        reason = "symmetry means both directions declare the identical distance"
    )]
    fn verify_symmetry(&self) -> Result<(), GraphError> {
        for (from, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                let reverse = self
                    .edges(edge.to)
                    .iter()
                    .find(|candidate| candidate.to == from);
                match reverse {
                    None => {
                        return Err(GraphError::MissingReverseEdge {
                            from: self.label(edge.to),
                            to: self.label(from),
                        });
                    }
                    Some(back) if back.distance != edge.distance => {
                        return Err(GraphError::AsymmetricDistance {
                            from: self.label(from),
                            to: self.label(edge.to),
                            forward: edge.distance,
                            backward: back.distance,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    fn label(&self, index: usize) -> LocationId {
        self.locations
            .get(index)
            .cloned()
            .unwrap_or_else(|| LocationId::new(format!("#{index}")))
    }

    /// The hub identifier.
    pub const fn hub(&self) -> &LocationId {
        &self.hub_id
    }

    /// Dense index of the hub.
    pub const fn hub_index(&self) -> usize {
        self.hub
    }

    /// All locations in declaration order.
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the graph has no locations. Always false for a built graph.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location at a dense index.
    pub fn location(&self, index: usize) -> Option<&LocationId> {
        self.locations.get(index)
    }

    /// Dense index of a location.
    pub fn index_of(&self, location: &LocationId) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Whether `location` is the hub.
    pub fn is_hub(&self, location: &LocationId) -> bool {
        self.index_of(location) == Some(self.hub)
    }

    /// Locations other than the hub, in declaration order.
    pub fn centers(&self) -> impl Iterator<Item = &LocationId> + '_ {
        self.locations
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != self.hub)
            .map(|(_, location)| location)
    }

    /// Outgoing edges of the location at `index`; empty for unknown indices.
    pub fn edges(&self, index: usize) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Neighbours of `location` with their distances, in declaration order.
    pub fn neighbours<'a>(
        &'a self,
        location: &LocationId,
    ) -> impl Iterator<Item = (&'a LocationId, f64)> + 'a {
        let edges = self
            .index_of(location)
            .map(|index| self.edges(index))
            .unwrap_or_default();
        edges.iter().filter_map(move |edge| {
            self.locations
                .get(edge.to)
                .map(|neighbour| (neighbour, edge.distance))
        })
    }

    /// Distance between two directly connected locations.
    pub fn distance(&self, from: &LocationId, to: &LocationId) -> Option<f64> {
        let target = self.index_of(to)?;
        self.edges(self.index_of(from)?)
            .iter()
            .find(|edge| edge.to == target)
            .map(|edge| edge.distance)
    }
}

fn push_neighbour(
    rows: &mut Vec<(LocationId, Vec<(LocationId, f64)>)>,
    from: LocationId,
    to: LocationId,
    distance: f64,
) {
    if let Some((_, neighbours)) = rows.iter_mut().find(|(location, _)| *location == from) {
        neighbours.push((to, distance));
    } else {
        rows.push((from, vec![(to, distance)]));
    }
}
