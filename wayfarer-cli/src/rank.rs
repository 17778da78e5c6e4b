//! Rank command: score, filter, and paginate an exported place list.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::LinearMatcher;
use wayfarer_ranker::{
    FieldMapping, InvalidPlacePolicy, RankOptions, RankedPage, load_places, load_preferences,
    rank_places,
};

use crate::{
    ARG_MIN_SCORE, ARG_ON_INVALID, ARG_OUTPUT, ARG_PAGE, ARG_PER_PAGE, ARG_PLACES,
    ARG_PREFERENCES, CliError, ENV_RANK_PLACES, ENV_RANK_PREFERENCES, output::emit,
    require_existing,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank every place in a JSON export against a traveller's \
                 preference vector. The export may be a bare array of place \
                 records or a list response with an `items` field. Results \
                 are sorted by match score, highest first, and paginated.",
    about = "Rank exported places by match score"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RankArgs {
    /// Path to the exported places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to a JSON object holding the preference vector.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Drop places scoring below this threshold (0-100).
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f32>,
    /// One-based page number to return.
    #[arg(long = ARG_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) page: Option<u32>,
    /// Places per page (defaults to 30, at most 500).
    #[arg(long = ARG_PER_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
    /// Either `fail` (default) or `skip` places that cannot be scored.
    #[arg(long = ARG_ON_INVALID, value_name = "policy")]
    #[serde(default)]
    pub(crate) on_invalid: Option<String>,
    /// Write the ranked page here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) options: RankOptions,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.places, ARG_PLACES)?;
        require_existing(&self.preferences, ARG_PREFERENCES)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_RANK_PLACES,
        })?;
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_RANK_PREFERENCES,
        })?;
        let on_invalid = args
            .on_invalid
            .as_deref()
            .map(str::parse::<InvalidPlacePolicy>)
            .transpose()
            .map_err(CliError::InvalidPolicy)?
            .unwrap_or_default();

        let defaults = RankOptions::default();
        let options = RankOptions {
            page: args.page.unwrap_or(defaults.page),
            per_page: args.per_page.unwrap_or(defaults.per_page),
            min_score: args.min_score,
            on_invalid,
        }
        .validate()?;

        Ok(Self {
            places,
            preferences,
            options,
            output: args.output,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_rank_with(&config, &mut stdout)
}

pub(crate) fn run_rank_with(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let page = execute_rank(config)?;
    emit(&page, config.output.as_deref(), writer)
}

fn execute_rank(config: &RankConfig) -> Result<RankedPage, CliError> {
    let mapping = FieldMapping::default();
    let preferences = load_preferences(&config.preferences, &mapping)?;
    let places = load_places(&config.places, &mapping)?;
    let page = rank_places(&LinearMatcher, &preferences, &places, config.options)?;
    if !page.skipped.is_empty() {
        log::warn!(
            "skipped {} places that could not be scored",
            page.skipped.len()
        );
    }
    Ok(page)
}
