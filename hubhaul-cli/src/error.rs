//! Error types emitted by the hubhaul CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hubhaul_core::{ParseOrderPolicyError, SolveError};
use hubhaul_data::NetworkLoadError;
use thiserror::Error;

/// Errors emitted by the hubhaul CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The order policy name was not recognised.
    #[error(transparent)]
    InvalidPolicy(#[from] ParseOrderPolicyError),
    /// Opening the order file failed.
    #[error("failed to open order at {path:?}: {source}")]
    OpenOrder {
        /// Order file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Order JSON could not be decoded.
    #[error("failed to parse order JSON at {path:?}: {source}")]
    ParseOrder {
        /// Order file path.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Loading the network configuration failed.
    #[error(transparent)]
    LoadNetwork(#[from] NetworkLoadError),
    /// The solver rejected the order or found no route.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver error.
        source: SolveError,
    },
    /// Serialising the delivery report failed.
    #[error("failed to serialise delivery report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the delivery report failed.
    #[error("failed to write delivery report: {0}")]
    WriteReport(#[source] std::io::Error),
}
