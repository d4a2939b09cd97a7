//! Error types emitted by the gymslot CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use gymslot_core::{PreferenceError, TablesError};
use gymslot_scorer::EngineError;
use thiserror::Error;

/// Errors emitted by the gymslot CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The crowd tolerance is not a percentage.
    #[error("crowd tolerance {value} must lie within 0-100 (set --{field} or {env})")]
    CrowdToleranceOutOfRange {
        /// Offending percentage.
        value: f64,
        /// Flag that sets the tolerance.
        field: &'static str,
        /// Environment variable that sets the tolerance.
        env: &'static str,
    },
    /// The result limit is zero.
    #[error("{field} must be at least 1 (set --{field} or {env})")]
    ZeroLimit {
        /// Flag that sets the limit.
        field: &'static str,
        /// Environment variable that sets the limit.
        env: &'static str,
    },
    /// A demographic target is not written as `dimension=ratio`.
    #[error("demographic target {entry:?} must look like dimension=ratio")]
    MalformedDemographic {
        /// The entry as given.
        entry: String,
    },
    /// A single-choice option holds an unknown value.
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidChoice {
        /// Flag that holds the value.
        field: &'static str,
        /// The value as given.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// A preference value fell outside its valid range.
    #[error("invalid preference: {0}")]
    InvalidPreference(#[from] PreferenceError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that names the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that names the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that names the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the tables file failed.
    #[error("failed to open gym tables at {path:?}: {source}")]
    OpenTables {
        /// Path to the tables file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Tables JSON could not be decoded.
    #[error("failed to parse gym tables JSON at {path:?}: {source}")]
    ParseTables {
        /// Path to the tables file.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The tables decoded but break a table invariant.
    #[error("gym tables in {path:?} failed validation: {source}")]
    InvalidTables {
        /// Path to the tables file.
        path: Utf8PathBuf,
        /// The violated invariant.
        #[source]
        source: TablesError,
    },
    /// Constructing the recommendation engine failed.
    #[error(transparent)]
    BuildEngine(#[from] EngineError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
