//! Facade crate for the gymslot recommendation engine.
//!
//! This crate re-exports the domain types from `gymslot-core` and the
//! engine from `gymslot-scorer`, so callers depend on a single crate.
//!
//! ```
//! use gymslot::{GymTables, RecommendationEngine, UserPreferences};
//!
//! let tables = GymTables::builtin();
//! let engine = RecommendationEngine::new(&tables).expect("built-in tables are valid");
//! let top = engine.recommend(&UserPreferences::new().with_preferred_hours([9, 15]));
//! assert!(!top.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use gymslot_core::{
    Availability, CrowdTable, DemographicTable, EquipmentCatalog, EquipmentProfile, Ethnicity,
    Gender, GymTables, OpeningWindow, OperatingHours, PreferenceError, RecommendationResult,
    SlotScorer, TablesError, TimeCategory, TimeSlot, UserPreferences, Weekday,
};

pub use gymslot_scorer::{EngineError, RECOMMENDATION_LIMIT, RecommendationEngine, ScoreWeights};
