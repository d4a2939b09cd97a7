//! Ranked output records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TimeCategory, TimeSlot, Weekday};

/// A scored slot ready for display.
///
/// # Examples
/// ```
/// use gymslot_core::{RecommendationResult, TimeCategory, TimeSlot, Weekday};
///
/// let result = RecommendationResult::new(TimeSlot::new(Weekday::Friday, 9), 82.5, 0.3);
/// assert_eq!(result.time, "09:00");
/// assert_eq!(result.crowd_percent, 30);
/// assert_eq!(result.time_category, TimeCategory::MidMorning);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationResult {
    /// Day of the week.
    pub day: Weekday,
    /// Zero-padded `HH:00` start time.
    pub time: String,
    /// Unrounded score; higher is better.
    pub score: f64,
    /// Expected crowd level in `[0.0, 1.0]`.
    pub crowd_level: f64,
    /// Crowd level as a rounded percentage.
    pub crowd_percent: u8,
    /// Time category of the slot's hour.
    pub time_category: TimeCategory,
}

impl RecommendationResult {
    /// Package a scored slot with its crowd level.
    #[must_use]
    pub fn new(slot: TimeSlot, score: f64, crowd_level: f64) -> Self {
        Self {
            day: slot.day,
            time: slot.label(),
            score,
            crowd_level,
            crowd_percent: crowd_percent(crowd_level),
            time_category: slot.category(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the level is clamped to [0, 1] so the rounded percentage fits in u8"
)]
fn crowd_percent(level: f64) -> u8 {
    let clamped = if level.is_finite() {
        level.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (clamped * 100.0).round() as u8
}
