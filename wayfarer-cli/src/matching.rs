//! Match command: score one place against one preference vector.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{LinearMatcher, MatchScore, MatchScorer};
use wayfarer_ranker::{FieldMapping, load_place, load_preferences};

use crate::{
    ARG_OUTPUT, ARG_PLACE, ARG_PREFERENCES, CliError, ENV_MATCH_PLACE, ENV_MATCH_PREFERENCES,
    output::emit, require_existing,
};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "match",
    long_about = "Score a single place against a traveller's preference \
                 vector. Both inputs are JSON objects using the hosted data \
                 store's field names. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Score one place against a preference vector"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct MatchArgs {
    /// Path to a JSON object holding the preference vector.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON object holding the place record.
    #[arg(long = ARG_PLACE, value_name = "path")]
    #[serde(default)]
    pub(crate) place: Option<Utf8PathBuf>,
    /// Write the result here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MatchArgs {
    fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchConfig {
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) place: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.preferences, ARG_PREFERENCES)?;
        require_existing(&self.place, ARG_PLACE)
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_MATCH_PREFERENCES,
        })?;
        let place = args.place.ok_or(CliError::MissingArgument {
            field: ARG_PLACE,
            env: ENV_MATCH_PLACE,
        })?;
        Ok(Self {
            preferences,
            place,
            output: args.output,
        })
    }
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_match_with(&config, &mut stdout)
}

pub(crate) fn run_match_with(config: &MatchConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let score = execute_match(config)?;
    emit(&score, config.output.as_deref(), writer)
}

fn execute_match(config: &MatchConfig) -> Result<MatchScore, CliError> {
    let mapping = FieldMapping::default();
    let preferences = load_preferences(&config.preferences, &mapping)?;
    let place = load_place(&config.place, &mapping)?;
    let score = LinearMatcher
        .score(&preferences, &place)
        .map_err(CliError::Match)?;
    log::debug!("place {} scored {:.1}", place.id(), score.match_score);
    Ok(score)
}
