//! The recommendation engine: score every weekly slot and keep the best.
//!
//! The engine borrows an immutable [`GymTables`] and never mutates it, so a
//! single engine can serve any number of callers. Scoring starts from the
//! base score, scales it by the crowd fit, adds the equipment adjustment,
//! scales by every demographic factor, adds the preferred-hour bonus, and
//! finally floors the result at zero.

#![forbid(unsafe_code)]

use gymslot_core::{
    GymTables, RecommendationResult, SlotScorer, TimeCategory, TimeSlot, UserPreferences,
    Weekday,
};

use crate::factors::{demographic_factor, equipment_adjustment, ratio_fit};
use crate::{EngineError, RECOMMENDATION_LIMIT, ScoreWeights};

/// Ranks weekly gym slots against a visitor's preferences.
///
/// # Examples
/// ```
/// use gymslot_core::{GymTables, UserPreferences};
/// use gymslot_scorer::RecommendationEngine;
///
/// let tables = GymTables::builtin();
/// let engine = RecommendationEngine::new(&tables).expect("built-in tables are valid");
/// let prefs = UserPreferences::new().with_crowd_tolerance(0.2);
/// let top = engine.recommend(&prefs);
/// assert_eq!(top.len(), 10);
/// assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'t> {
    tables: &'t GymTables,
    weights: ScoreWeights,
}

impl<'t> RecommendationEngine<'t> {
    /// Build an engine over `tables` with default weights.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidTables`] when the tables break an
    /// invariant.
    pub fn new(tables: &'t GymTables) -> Result<Self, EngineError> {
        tables.validate()?;
        Ok(Self {
            tables,
            weights: ScoreWeights::default(),
        })
    }

    /// Replace the scoring weights.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidWeights`] when the weights are unusable.
    pub fn with_weights(self, weights: ScoreWeights) -> Result<Self, EngineError> {
        let validated = weights.validate()?;
        Ok(Self {
            weights: validated,
            ..self
        })
    }

    /// Return the tables the engine reads.
    #[must_use]
    pub const fn tables(&self) -> &'t GymTables {
        self.tables
    }

    /// Return the weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Categorise an hour of the day.
    #[must_use]
    pub const fn categorize(hour: u8) -> TimeCategory {
        TimeCategory::from_hour(hour)
    }

    /// Return the expected crowd level, neutral when not tabulated.
    #[must_use]
    pub fn crowd_level(&self, day: Weekday, hour: u8) -> f64 {
        self.tables.crowd.level(day, hour)
    }

    /// Return the ten best slots for `preferences`, best first.
    #[must_use]
    pub fn recommend(&self, preferences: &UserPreferences) -> Vec<RecommendationResult> {
        self.recommend_top(preferences, RECOMMENDATION_LIMIT)
    }

    /// Return up to `limit` slots for `preferences`, best first.
    ///
    /// Ties keep enumeration order: Monday before Sunday, earlier hours
    /// before later ones.
    #[must_use]
    pub fn recommend_top(
        &self,
        preferences: &UserPreferences,
        limit: usize,
    ) -> Vec<RecommendationResult> {
        let mut candidates: Vec<RecommendationResult> = self
            .tables
            .hours
            .slots()
            .map(|slot| {
                let crowd_level = self.crowd_level(slot.day, slot.hour);
                RecommendationResult::new(slot, self.score(&slot, preferences), crowd_level)
            })
            .collect();
        let evaluated = candidates.len();
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(limit);
        log::debug!(
            "ranked {evaluated} slots, returning {} (limit {limit})",
            candidates.len()
        );
        candidates
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scoring blends multiplicative fits with additive bonuses"
    )]
    fn raw_score(&self, slot: &TimeSlot, preferences: &UserPreferences) -> f64 {
        let crowd_level = self.crowd_level(slot.day, slot.hour);
        let crowd_fit = ratio_fit(crowd_level, preferences.crowd_tolerance());

        let mut score = self.weights.base_score * crowd_fit;
        score += equipment_adjustment(
            &self.tables.equipment,
            crowd_level,
            preferences,
            self.weights,
        );
        score *= demographic_factor(&self.tables.demographics, slot.category(), preferences);
        if preferences.is_preferred_hour(slot.hour) {
            score += self.weights.preferred_hour_bonus;
        }
        log::trace!(
            "{} {}: crowd {crowd_level}, fit {crowd_fit}, score {score}",
            slot.day,
            slot.label()
        );
        score
    }
}

impl SlotScorer for RecommendationEngine<'_> {
    fn score(&self, slot: &TimeSlot, preferences: &UserPreferences) -> f64 {
        Self::sanitise(self.raw_score(slot, preferences))
    }
}
