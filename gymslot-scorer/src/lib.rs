//! Scoring and ranking of weekly gym slots.
//!
//! [`RecommendationEngine`] reads the static tables from
//! [`gymslot_core::GymTables`] and scores every slot the gym is open
//! against a visitor's [`UserPreferences`](gymslot_core::UserPreferences):
//!
//! - **Crowd fit** scales the base score by how close the slot's expected
//!   crowd level is to the visitor's crowd tolerance.
//! - **Equipment interest** adds a bonus per known item, or a penalty when
//!   the slot is busy.
//! - **Demographic fit** scales the running score once per requested
//!   dimension, and again for single-value gender or ethnicity preferences.
//! - **Preferred hours** add a flat bonus.
//!
//! Scores are floored at zero and carry no upper bound. Rounding is left to
//! whoever displays them.
//!
//! # Examples
//!
//! ```
//! use gymslot_core::{GymTables, TimeSlot, UserPreferences, Weekday};
//! use gymslot_scorer::{RecommendationEngine, SlotScorer};
//!
//! let tables = GymTables::builtin();
//! let engine = RecommendationEngine::new(&tables).expect("built-in tables are valid");
//! let prefs = UserPreferences::new().with_crowd_tolerance(0.2);
//!
//! // Monday 07:00 is tabulated at 0.2, an exact match.
//! let score = engine.score(&TimeSlot::new(Weekday::Monday, 7), &prefs);
//! assert_eq!(score, 100.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod factors;
mod weights;

pub use engine::RecommendationEngine;
pub use error::EngineError;
pub use gymslot_core::SlotScorer;
pub use weights::ScoreWeights;

/// Number of slots [`RecommendationEngine::recommend`] returns at most.
pub const RECOMMENDATION_LIMIT: usize = 10;
