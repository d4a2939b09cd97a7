//! Errors raised while validating gym tables.

use thiserror::Error;

use crate::{TimeCategory, Weekday};

/// A table invariant that does not hold.
#[derive(Debug, Error, PartialEq)]
pub enum TablesError {
    /// An opening window did not open strictly before it closed.
    #[error("{day} opens at {open}:00 but closes at {close}:00")]
    InvalidOpeningWindow {
        /// Affected day.
        day: Weekday,
        /// Opening hour.
        open: u8,
        /// Closing hour.
        close: u8,
    },
    /// A crowd table key was not an `HH:00` label.
    #[error("crowd entry '{label}' on {day} is not an HH:00 label")]
    InvalidHourLabel {
        /// Affected day.
        day: Weekday,
        /// Offending label.
        label: String,
    },
    /// A crowd level was not a finite ratio in `[0.0, 1.0]`.
    #[error("crowd level {level} at {label} on {day} must be between 0.0 and 1.0")]
    CrowdLevelOutOfRange {
        /// Affected day.
        day: Weekday,
        /// Hour label of the entry.
        label: String,
        /// Rejected level.
        level: f64,
    },
    /// A demographic dimension name was blank.
    #[error("demographic table for {category} contains a blank dimension")]
    BlankDimension {
        /// Affected category.
        category: TimeCategory,
    },
    /// A demographic ratio was not a finite ratio in `[0.0, 1.0]`.
    #[error("{dimension} ratio {ratio} during {category} must be between 0.0 and 1.0")]
    RatioOutOfRange {
        /// Affected category.
        category: TimeCategory,
        /// Affected dimension.
        dimension: String,
        /// Rejected ratio.
        ratio: f64,
    },
    /// An equipment name was blank.
    #[error("equipment catalog contains a blank name")]
    BlankEquipmentName,
    /// An equipment conflict risk was not a finite ratio in `[0.0, 1.0]`.
    #[error("conflict risk {risk} for '{name}' must be between 0.0 and 1.0")]
    ConflictRiskOutOfRange {
        /// Equipment name.
        name: String,
        /// Rejected risk.
        risk: f64,
    },
}
