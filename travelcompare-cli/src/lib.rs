//! Command-line interface for comparing travel modes between two addresses.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod compare;
mod error;
mod render;

use compare::{CompareArgs, run_compare};
pub use error::CliError;

const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ARG_DEPARTURE_TIME: &str = "departure-time";
const ARG_API_KEY: &str = "api-key";
const ARG_BASE_URL: &str = "base-url";
const ARG_LANGUAGE_CODE: &str = "language-code";
const ARG_REFERER: &str = "referer";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_SAMPLE: &str = "sample";
const ARG_JSON: &str = "json";
const ENV_FROM: &str = "TRAVELCOMPARE_CMDS_COMPARE_FROM";
const ENV_TO: &str = "TRAVELCOMPARE_CMDS_COMPARE_TO";

/// Run the travelcompare CLI with the current process arguments and
/// environment.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Compare(args) => run_compare(args).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "travelcompare",
    about = "Compare travel time and distance across transport modes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare car, public transport, motorbike, bicycle and walking routes.
    Compare(CompareArgs),
}

#[cfg(test)]
mod tests;
