//! Loading gym tables from disk and the `tables` command.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gymslot_core::GymTables;

use crate::fs::{file_is_file, open_utf8_file};
use crate::render::write_json;
use crate::{ARG_TABLES, CliError};

/// CLI arguments for the `tables` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    long_about = "Print gym tables as JSON. Without a path the built-in \
                 tables are printed, ready to be edited and passed back \
                 with `recommend --tables`. With a path the file is \
                 validated and printed in normalised form.",
    about = "Print the built-in or a validated gym table set"
)]
pub(crate) struct TablesArgs {
    /// Path to a JSON tables file to validate instead of the built-ins.
    #[arg(value_name = "path")]
    pub(crate) path: Option<Utf8PathBuf>,
}

pub(crate) fn run_tables(args: &TablesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_tables_with(args, &mut stdout)
}

pub(crate) fn run_tables_with(args: &TablesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let tables = load_tables(args.path.as_deref())?;
    write_json(writer, &tables)
}

/// Return the built-in tables, or the validated tables stored at `path`.
pub(crate) fn load_tables(tables_path: Option<&Utf8Path>) -> Result<GymTables, CliError> {
    let Some(path) = tables_path else {
        return Ok(GymTables::builtin());
    };
    require_existing(path, ARG_TABLES)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTables {
        path: path.to_path_buf(),
        source,
    })?;
    let tables: GymTables =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseTables {
                path: path.to_path_buf(),
                source,
            }
        })?;
    tables.validate().map_err(|source| CliError::InvalidTables {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded gym tables from {path}");
    Ok(tables)
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
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
