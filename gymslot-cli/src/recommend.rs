//! Recommend command implementation for the gymslot CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use gymslot_core::{Ethnicity, Gender, UserPreferences};
use gymslot_scorer::{RECOMMENDATION_LIMIT, RecommendationEngine};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{write_json, write_text};
use crate::tables::load_tables;
use crate::{
    ARG_CROWD_TOLERANCE, ARG_DEMOGRAPHIC, ARG_EQUIPMENT, ARG_ETHNICITY, ARG_FORMAT, ARG_GENDER,
    ARG_LIMIT, ARG_PREFERRED_HOURS, ARG_TABLES, CliError, ENV_CROWD_TOLERANCE, ENV_LIMIT,
};

/// Gender value meaning "no preference".
const ANY_GENDER: &str = "both";
/// Ethnicity value meaning "no preference".
const ANY_ETHNICITY: &str = "none";

/// Encodings for the ranked slot listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Numbered listing for people.
    #[default]
    Text,
    /// Pretty-printed JSON array of results.
    Json,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the week's opening hours against a visitor's \
                 preferences and print the best slots. Every option can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Recommend the best times to visit the gym"
)]
#[ortho_config(prefix = "GYMSLOT")]
pub(crate) struct RecommendArgs {
    /// Preferred crowd level as a percentage of capacity (0-100).
    #[arg(long = ARG_CROWD_TOLERANCE, value_name = "percent")]
    #[serde(default)]
    pub(crate) crowd_tolerance: Option<f64>,
    /// Hours of the day to favour, comma separated (0-23).
    #[arg(
        long = ARG_PREFERRED_HOURS,
        value_name = "hours",
        value_delimiter = ','
    )]
    #[serde(default)]
    pub(crate) preferred_hours: Vec<u8>,
    /// Target share of a demographic dimension, written as `dimension=ratio`.
    #[arg(long = ARG_DEMOGRAPHIC, value_name = "dimension=ratio")]
    #[serde(default)]
    pub(crate) demographic: Vec<String>,
    /// Favour slots where this gender is common (`male`, `female`, or `both`).
    #[arg(long = ARG_GENDER, value_name = "gender")]
    #[serde(default)]
    pub(crate) gender: Option<String>,
    /// Favour slots where this group is common (`asian`, `caucasian`, `other`, or `none`).
    #[arg(long = ARG_ETHNICITY, value_name = "group")]
    #[serde(default)]
    pub(crate) ethnicity: Option<String>,
    /// Equipment the visitor wants to use; repeat for several items.
    #[arg(long = ARG_EQUIPMENT, value_name = "name")]
    #[serde(default)]
    pub(crate) equipment: Vec<String>,
    /// Path to a JSON file replacing the built-in gym tables.
    #[arg(long = ARG_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) tables: Option<Utf8PathBuf>,
    /// Maximum number of slots to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Output encoding.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Visitor preferences assembled from every configuration layer.
    pub(crate) preferences: UserPreferences,
    /// Alternative tables file, or `None` for the built-in tables.
    pub(crate) tables: Option<Utf8PathBuf>,
    /// Maximum number of slots to print.
    pub(crate) limit: usize,
    /// Output encoding.
    pub(crate) format: OutputFormat,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let mut preferences = UserPreferences::new();
        if let Some(percent) = args.crowd_tolerance {
            preferences.try_set_crowd_tolerance(percent_to_fraction(percent)?)?;
        }
        for hour in args.preferred_hours {
            preferences.try_add_preferred_hour(hour)?;
        }
        for entry in &args.demographic {
            let (dimension, target) = parse_demographic(entry)?;
            preferences.try_set_demographic_target(dimension, target)?;
        }
        preferences.set_gender_preference(parse_gender(args.gender.as_deref())?);
        preferences.set_ethnicity_preference(parse_ethnicity(args.ethnicity.as_deref())?);
        for item in args.equipment {
            preferences.add_equipment(item);
        }

        let limit = args.limit.unwrap_or(RECOMMENDATION_LIMIT);
        if limit == 0 {
            return Err(CliError::ZeroLimit {
                field: ARG_LIMIT,
                env: ENV_LIMIT,
            });
        }

        Ok(Self {
            preferences,
            tables: args.tables,
            limit,
            format: args.format.unwrap_or_default(),
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages convert to fractions by division"
)]
fn percent_to_fraction(percent: f64) -> Result<f64, CliError> {
    if (0.0..=100.0).contains(&percent) {
        Ok(percent / 100.0)
    } else {
        Err(CliError::CrowdToleranceOutOfRange {
            value: percent,
            field: ARG_CROWD_TOLERANCE,
            env: ENV_CROWD_TOLERANCE,
        })
    }
}

/// Split a `dimension=ratio` entry. Range checks happen when the target is
/// stored.
pub(crate) fn parse_demographic(entry: &str) -> Result<(&str, f64), CliError> {
    let malformed = || CliError::MalformedDemographic {
        entry: entry.to_owned(),
    };
    let (dimension, raw_ratio) = entry.split_once('=').ok_or_else(malformed)?;
    let ratio = raw_ratio.trim().parse::<f64>().map_err(|_| malformed())?;
    Ok((dimension.trim(), ratio))
}

fn parse_gender(raw: Option<&str>) -> Result<Option<Gender>, CliError> {
    parse_choice(raw, ANY_GENDER, ARG_GENDER)
}

fn parse_ethnicity(raw: Option<&str>) -> Result<Option<Ethnicity>, CliError> {
    parse_choice(raw, ANY_ETHNICITY, ARG_ETHNICITY)
}

fn parse_choice<T>(
    raw: Option<&str>,
    no_preference: &str,
    field: &'static str,
) -> Result<Option<T>, CliError>
where
    T: std::str::FromStr<Err = String>,
{
    let Some(value) = raw else {
        return Ok(None);
    };
    if value.trim().eq_ignore_ascii_case(no_preference) {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|reason| CliError::InvalidChoice {
        field,
        value: value.to_owned(),
        reason,
    })
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, writer)
}

/// Rank slots for a resolved configuration and write them out.
pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    log::debug!("resolved recommend configuration: {config:?}");
    let tables = load_tables(config.tables.as_deref())?;
    let engine = RecommendationEngine::new(&tables)?;
    let results = engine.recommend_top(&config.preferences, config.limit);
    match config.format {
        OutputFormat::Text => write_text(writer, &results),
        OutputFormat::Json => write_json(writer, &results),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
