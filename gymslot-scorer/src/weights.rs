//! Tunable constants of the scoring policy.
#![forbid(unsafe_code)]

use crate::EngineError;

/// Base score and bonuses applied by the engine.
///
/// Crowd and demographic fits scale the running score; the bonuses and
/// penalties here are added on top of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Score of a slot before any factor is applied.
    pub base_score: f64,
    /// Added when the slot's hour is one of the preferred hours.
    pub preferred_hour_bonus: f64,
    /// Added per listed equipment item when the slot is not busy.
    pub equipment_bonus: f64,
    /// Subtracted per listed equipment item when the slot is busy.
    pub equipment_peak_penalty: f64,
    /// Crowd level above which a slot counts as busy.
    pub equipment_peak_threshold: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidWeights`] when a value is not finite or
    /// negative, the base score is zero, or the peak threshold lies outside
    /// `[0.0, 1.0]`.
    pub fn validate(self) -> Result<Self, EngineError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(EngineError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values()
            && self.has_non_negative_values()
            && self.base_score > 0.0
            && self.equipment_peak_threshold <= 1.0
    }

    const fn has_finite_values(self) -> bool {
        self.base_score.is_finite()
            && self.preferred_hour_bonus.is_finite()
            && self.equipment_bonus.is_finite()
            && self.equipment_peak_penalty.is_finite()
            && self.equipment_peak_threshold.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.base_score >= 0.0
            && self.preferred_hour_bonus >= 0.0
            && self.equipment_bonus >= 0.0
            && self.equipment_peak_penalty >= 0.0
            && self.equipment_peak_threshold >= 0.0
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            preferred_hour_bonus: 15.0,
            equipment_bonus: 5.0,
            equipment_peak_penalty: 10.0,
            equipment_peak_threshold: 0.7,
        }
    }
}
