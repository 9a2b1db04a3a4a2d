//! Solve command implementation for the hubhaul CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hubhaul_core::{OrderPolicy, OrderRequest, SolveResponse, Solver};
use hubhaul_fs::open_utf8_file;
use hubhaul_solver_dfs::{ExhaustiveSolver, ExhaustiveSolverConfig};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_SOLVE_MAX_EXPANSIONS, ARG_SOLVE_NETWORK, ARG_SOLVE_ORDER, ARG_SOLVE_POLICY, CliError,
    ENV_SOLVE_ORDER,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the cheapest route that collects every ordered item \
                 from its center and drops it at the hub. The order is a JSON \
                 object mapping product ids to quantities. Without --network \
                 the built-in regional network is used.",
    about = "Solve a delivery order"
)]
#[ortho_config(prefix = "HUBHAUL")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing the order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) order_path: Option<Utf8PathBuf>,
    /// Path to a JSON network configuration (graph, catalog, tariff).
    #[arg(long = ARG_SOLVE_NETWORK, value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// How unknown products and non-positive quantities are treated
    /// ("lenient" or "strict").
    #[arg(long = ARG_SOLVE_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) policy: Option<String>,
    /// Abort the search after this many expanded states.
    #[arg(long = ARG_SOLVE_MAX_EXPANSIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_expansions: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON order file.
    pub(crate) order_path: Utf8PathBuf,
    /// Network configuration file; `None` selects the built-in network.
    pub(crate) network: Option<Utf8PathBuf>,
    /// Order validation policy.
    pub(crate) policy: OrderPolicy,
    /// Optional expansion budget.
    pub(crate) max_expansions: Option<u64>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.order_path, ARG_SOLVE_ORDER)?;
        if let Some(network) = &self.network {
            Self::require_existing(network, ARG_SOLVE_NETWORK)?;
        }
        Ok(())
    }

    pub(crate) const fn solver_config(&self) -> ExhaustiveSolverConfig {
        ExhaustiveSolverConfig {
            policy: self.policy,
            max_expansions: self.max_expansions,
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match hubhaul_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let order_path = args.order_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_ORDER,
            env: ENV_SOLVE_ORDER,
        })?;
        let policy = args
            .policy
            .as_deref()
            .map(str::parse::<OrderPolicy>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            order_path,
            network: args.network,
            policy,
            max_expansions: args.max_expansions,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let network = config.network.as_deref().map_or_else(
            hubhaul_data::default_network,
            hubhaul_data::load_network,
        )?;
        Ok(Box::new(ExhaustiveSolver::with_config(
            network,
            config.solver_config(),
        )))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_solve(args, builder)?;
    write_report(writer, &response)
}

fn execute_solve(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveResponse, CliError> {
    let config = resolve_solve_config(args)?;
    let order = load_order(&config.order_path)?;
    debug!(
        "solving {} order lines from {} with {} policy",
        order.iter().count(),
        config.order_path,
        config.policy
    );
    let solver = builder.build(&config)?;
    solver
        .solve(&order)
        .map_err(|source| CliError::Solve { source })
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`OrderRequest`] from disk.
pub(super) fn load_order(path: &Utf8Path) -> Result<OrderRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOrder {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseOrder {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, response: &SolveResponse) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(&response.delivery.report())
        .map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
