//! Network configuration loading for the hubhaul engine.
//!
//! Responsibilities:
//! - Define the JSON format for graphs, catalogs and tariffs.
//! - Load and validate network files into [`hubhaul_core::Network`].
//! - Ship the built-in regional network.
//!
//! Boundaries:
//! - Do not encode routing rules (they live in `hubhaul-core` and the
//!   solver crates).
//!
//! Invariants:
//! - A loaded network has passed every graph, catalog and tariff check.

#![forbid(unsafe_code)]

mod network_file;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use hubhaul_core::{Network, NetworkError};
use log::debug;
use thiserror::Error;

pub use network_file::{NetworkFile, OrderedMap, TariffFile};

/// JSON source of the built-in regional network.
pub const REGIONAL_NETWORK_JSON: &str = include_str!("../data/regional.json");

/// Errors returned when loading a network configuration.
#[derive(Debug, Error)]
pub enum NetworkLoadError {
    /// The file could not be read.
    #[error("failed to read network file at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The text was not a valid network document.
    #[error("failed to parse network configuration")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but describes an inconsistent network.
    #[error("invalid network configuration: {0}")]
    Invalid(#[from] NetworkError),
}

/// Parse and validate a network from JSON text.
///
/// # Examples
/// ```
/// use hubhaul_data::parse_network;
///
/// # fn main() -> Result<(), hubhaul_data::NetworkLoadError> {
/// let network = parse_network(r#"{
///     "hub": "L1",
///     "distances": { "C1": { "L1": 3.0 }, "L1": { "C1": 3.0 } },
///     "products": { "A": { "center": "C1", "weight": 3.0 } }
/// }"#)?;
/// assert_eq!(network.catalog().len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn parse_network(json: &str) -> Result<Network, NetworkLoadError> {
    let file: NetworkFile =
        serde_json::from_str(json).map_err(|source| NetworkLoadError::Parse { source })?;
    let network = file.into_network()?;
    debug!(
        "loaded network with {} locations and {} products, hub {}",
        network.graph().len(),
        network.catalog().len(),
        network.graph().hub()
    );
    Ok(network)
}

/// Read, parse and validate a network file.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use hubhaul_data::load_network;
///
/// # fn main() -> Result<(), hubhaul_data::NetworkLoadError> {
/// let network = load_network(Utf8Path::new("network.json"))?;
/// println!("hub: {}", network.graph().hub());
/// # Ok(())
/// # }
/// ```
pub fn load_network(path: &Utf8Path) -> Result<Network, NetworkLoadError> {
    let json =
        hubhaul_fs::read_utf8_to_string(path).map_err(|source| NetworkLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read network configuration from {path}");
    parse_network(&json)
}

/// The built-in regional network: centers `C1`, `C2`, `C3` around hub `L1`
/// with products `A` to `I` and the standard tariff.
pub fn default_network() -> Result<Network, NetworkLoadError> {
    parse_network(REGIONAL_NETWORK_JSON)
}
