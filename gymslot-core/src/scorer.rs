//! Score time slots for a visitor.
//!
//! The `SlotScorer` trait assigns a desirability score to a
//! [`TimeSlot`](crate::TimeSlot) given a visitor's
//! [`UserPreferences`](crate::UserPreferences).

use crate::{TimeSlot, UserPreferences};

/// Calculate a desirability score for a time slot.
///
/// Higher scores indicate a better match between the slot and the
/// caller's preferences. Implementations must be thread-safe (`Send` +
/// `Sync`) so one scorer can serve concurrent callers. The method is
/// infallible; missing data must be treated as neutral rather than as an
/// error.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores carry no upper bound. Use [`SlotScorer::sanitise`] to apply
/// these guards.
///
/// # Examples
///
/// ```rust
/// use gymslot_core::{SlotScorer, TimeSlot, UserPreferences, Weekday};
///
/// struct EarlyBird;
///
/// impl SlotScorer for EarlyBird {
///     fn score(&self, slot: &TimeSlot, _prefs: &UserPreferences) -> f64 {
///         Self::sanitise(f64::from(24 - slot.hour))
///     }
/// }
///
/// let prefs = UserPreferences::new();
/// assert_eq!(EarlyBird.score(&TimeSlot::new(Weekday::Monday, 6), &prefs), 18.0);
/// ```
pub trait SlotScorer: Send + Sync {
    /// Return a score for `slot` according to `preferences`.
    fn score(&self, slot: &TimeSlot, preferences: &UserPreferences) -> f64;

    /// Floor and validate a raw score.
    ///
    /// Returns `0.0` for non-finite, negative, or negative-zero values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() || score <= 0.0 {
            return 0.0;
        }
        score
    }
}
