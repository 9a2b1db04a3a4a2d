//! Command-line interface for the hubhaul delivery planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;

use solve::SolveArgs;
#[cfg(test)]
use solve::{
    DefaultSolveSolverBuilder, SolveConfig, SolveSolverBuilder, config_from_layers_for_test,
    load_order, run_solve_with,
};

const ARG_SOLVE_ORDER: &str = "order";
const ARG_SOLVE_NETWORK: &str = "network";
const ARG_SOLVE_POLICY: &str = "policy";
const ARG_SOLVE_MAX_EXPANSIONS: &str = "max-expansions";
const ENV_SOLVE_ORDER: &str = "HUBHAUL_CMDS_SOLVE_ORDER_PATH";

/// Run the hubhaul CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hubhaul",
    about = "Plan minimum-cost pickup and delivery routes to a hub",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the cheapest route delivering an order to the hub.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
