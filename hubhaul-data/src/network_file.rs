//! On-disk JSON shape of a network configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use hubhaul_core::{Catalog, Graph, LocationId, Network, NetworkError, Product, ProductId, Tariff};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Network configuration as written in JSON.
///
/// `distances` lists every edge from both endpoints; the two directions must
/// agree. Rows and neighbours keep their document order, which is the order
/// the search explores them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkFile {
    /// Identifier of the hub.
    pub hub: LocationId,
    /// Per-direction adjacency: location to neighbour to distance.
    pub distances: OrderedMap<LocationId, OrderedMap<LocationId, f64>>,
    /// Catalog entries keyed by product.
    pub products: BTreeMap<ProductId, Product>,
    /// Tariff parameters; omitted fields take the standard schedule.
    #[serde(default)]
    pub tariff: TariffFile,
}

/// Tariff parameters as written in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffFile {
    /// Rate charged up to the allowance.
    pub base_rate: f64,
    /// Weight carried at the base rate.
    pub allowance: f64,
    /// Width of each weight band above the allowance.
    pub step_weight: f64,
    /// Rate increase per started band.
    pub step_rate: f64,
}

impl Default for TariffFile {
    fn default() -> Self {
        Self::from(&Tariff::default())
    }
}

impl From<&Tariff> for TariffFile {
    fn from(tariff: &Tariff) -> Self {
        Self {
            base_rate: tariff.base_rate(),
            allowance: tariff.allowance(),
            step_weight: tariff.step_weight(),
            step_rate: tariff.step_rate(),
        }
    }
}

/// JSON object whose entries keep their document order.
///
/// Duplicate keys are kept as written; graph construction rejects them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V>(Vec<(K, V)>);

impl<K, V> OrderedMap<K, V> {
    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.0.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<K, V> {
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(OrderedMap(entries))
    }
}

impl NetworkFile {
    /// Validate the configuration and build a [`Network`].
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let graph = Graph::from_adjacency(
            self.hub,
            self.distances
                .into_iter()
                .map(|(location, neighbours)| (location, neighbours.into_iter())),
        )?;
        let catalog = Catalog::new(self.products)?;
        let tariff = Tariff::new(
            self.tariff.base_rate,
            self.tariff.allowance,
            self.tariff.step_weight,
            self.tariff.step_rate,
        )?;
        Network::new(graph, catalog, tariff)
    }
}

impl From<&Network> for NetworkFile {
    fn from(network: &Network) -> Self {
        let graph = network.graph();
        let distances = graph
            .locations()
            .iter()
            .map(|location| {
                let neighbours = graph
                    .neighbours(location)
                    .map(|(neighbour, distance)| (neighbour.clone(), distance))
                    .collect();
                (location.clone(), neighbours)
            })
            .collect();
        let products = network
            .catalog()
            .iter()
            .map(|(id, product)| (id.clone(), product.clone()))
            .collect();
        Self {
            hub: graph.hub().clone(),
            distances,
            products,
            tariff: TariffFile::from(network.tariff()),
        }
    }
}
