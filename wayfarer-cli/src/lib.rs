//! Command-line interface for scoring and ranking places against a
//! traveller's preferences.
//!
//! Two subcommands are provided:
//! - `match` scores one place record against one preference vector.
//! - `rank` scores every place in an export, then filters, sorts, and
//!   paginates the results.
//!
//! Every option can also come from a configuration file or from environment
//! variables prefixed with `WAYFARER_`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod matching;
mod output;
mod rank;

pub use error::CliError;

use matching::MatchArgs;
use rank::RankArgs;

const ARG_PREFERENCES: &str = "preferences";
const ARG_PLACE: &str = "place";
const ARG_PLACES: &str = "places";
const ARG_OUTPUT: &str = "output";
const ARG_MIN_SCORE: &str = "min-score";
const ARG_PAGE: &str = "page";
const ARG_PER_PAGE: &str = "per-page";
const ARG_ON_INVALID: &str = "on-invalid";
const ENV_MATCH_PREFERENCES: &str = "WAYFARER_CMDS_MATCH_PREFERENCES";
const ENV_MATCH_PLACE: &str = "WAYFARER_CMDS_MATCH_PLACE";
const ENV_RANK_PREFERENCES: &str = "WAYFARER_CMDS_RANK_PREFERENCES";
const ENV_RANK_PLACES: &str = "WAYFARER_CMDS_RANK_PLACES";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// input cannot be read, or when scoring or writing the result fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Match(args) => matching::run_match(args),
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Score and rank travel destinations against traveller preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one place against a preference vector.
    Match(MatchArgs),
    /// Rank an export of places by match score.
    Rank(RankArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match wayfarer_fs::is_regular_file(path) {
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

#[cfg(test)]
mod tests;
