//! Command-line interface for ranking gym visit times.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;
mod render;
mod tables;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use tables::{TablesArgs, run_tables};

const ARG_CROWD_TOLERANCE: &str = "crowd-tolerance";
const ARG_PREFERRED_HOURS: &str = "preferred-hours";
const ARG_DEMOGRAPHIC: &str = "demographic";
const ARG_GENDER: &str = "gender";
const ARG_ETHNICITY: &str = "ethnicity";
const ARG_EQUIPMENT: &str = "equipment";
const ARG_TABLES: &str = "tables";
const ARG_LIMIT: &str = "limit";
const ARG_FORMAT: &str = "format";
const ENV_CROWD_TOLERANCE: &str = "GYMSLOT_CMDS_RECOMMEND_CROWD_TOLERANCE";
const ENV_LIMIT: &str = "GYMSLOT_CMDS_RECOMMEND_LIMIT";

/// Run the gymslot CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// tables cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Tables(args) => run_tables(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gymslot",
    about = "Find the best times to visit the gym",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the week's slots against visitor preferences.
    Recommend(RecommendArgs),
    /// Print the built-in gym tables, or validate a tables file.
    Tables(TablesArgs),
}

#[cfg(test)]
mod tests;
