//! Core domain types for the Gymslot engine.
//!
//! The crate models a week of gym opening hours, the static tables that
//! describe how busy and who is present at each hour, and the visitor
//! preferences those tables are scored against. Scoring itself lives
//! behind the [`SlotScorer`] trait.
//!
//! # Examples
//!
//! ```
//! use gymslot_core::{GymTables, TimeCategory, Weekday};
//!
//! let tables = GymTables::builtin();
//! let first = tables.hours.slots().next().expect("Monday opens");
//! assert_eq!(first.day, Weekday::Monday);
//! assert_eq!(first.category(), TimeCategory::EarlyMorning);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod demographic;
pub mod preferences;
pub mod recommendation;
pub mod scorer;
pub mod slot;
pub mod tables;
pub mod weekday;

pub use category::TimeCategory;
pub use demographic::{Ethnicity, Gender};
pub use preferences::{DEFAULT_CROWD_TOLERANCE, PreferenceError, UserPreferences};
pub use recommendation::RecommendationResult;
pub use scorer::SlotScorer;
pub use slot::{TimeSlot, hour_label, parse_hour_label};
pub use tables::{
    Availability, CrowdTable, DEFAULT_CROWD_LEVEL, DemographicTable, EquipmentCatalog,
    EquipmentProfile, GymTables, LATEST_START_HOUR, OpeningWindow, OperatingHours, TablesError,
};
pub use weekday::Weekday;

/// Report whether `value` is a finite ratio in `[0.0, 1.0]`.
pub(crate) fn is_ratio(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Fold a table or preference key to its canonical form.
pub(crate) fn normalise_name(name: &str) -> String {
    name.trim().to_lowercase()
}
