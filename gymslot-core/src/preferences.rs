//! User preferences: what a visitor wants from a gym slot.
//!
//! Every field is optional. Lenient setters clamp ratios into `[0.0, 1.0]`;
//! the `try_*` setters reject out-of-range input instead.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{Ethnicity, Gender, is_ratio, normalise_name};

/// Crowd tolerance assumed when the visitor does not state one.
pub const DEFAULT_CROWD_TOLERANCE: f64 = 0.5;

/// Errors raised by the strict preference setters.
#[derive(Debug, Error, PartialEq)]
pub enum PreferenceError {
    /// Crowd tolerance was not a finite fraction in `[0.0, 1.0]`.
    #[error("crowd tolerance {value} must be between 0.0 and 1.0")]
    CrowdToleranceOutOfRange {
        /// Rejected value.
        value: f64,
    },
    /// A demographic target was not a finite ratio in `[0.0, 1.0]`.
    #[error("target ratio {value} for '{dimension}' must be between 0.0 and 1.0")]
    TargetOutOfRange {
        /// Dimension the target was set for.
        dimension: String,
        /// Rejected value.
        value: f64,
    },
    /// A demographic dimension name was empty or whitespace.
    #[error("demographic dimension must not be empty")]
    EmptyDimension,
    /// A preferred hour was outside `0..=23`.
    #[error("preferred hour {hour} must be between 0 and 23")]
    HourOutOfRange {
        /// Rejected hour.
        hour: u8,
    },
}

/// A visitor's preferences for a gym slot.
///
/// # Examples
/// ```
/// use gymslot_core::{Gender, UserPreferences};
///
/// let prefs = UserPreferences::new()
///     .with_crowd_tolerance(0.3)
///     .with_preferred_hours([9, 15])
///     .with_demographic_target("Female", 0.4)
///     .with_gender_preference(Gender::Female)
///     .with_equipment("weight_room");
///
/// assert_eq!(prefs.crowd_tolerance(), 0.3);
/// assert!(prefs.is_preferred_hour(15));
/// assert_eq!(prefs.demographic_target("female"), Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPreferences {
    crowd_tolerance: Option<f64>,
    preferred_hours: BTreeSet<u8>,
    demographic_targets: BTreeMap<String, f64>,
    gender: Option<Gender>,
    ethnicity: Option<Ethnicity>,
    equipment: Vec<String>,
}

impl UserPreferences {
    /// Construct an empty record; every field falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the desired crowd level, or [`DEFAULT_CROWD_TOLERANCE`].
    #[must_use]
    pub fn crowd_tolerance(&self) -> f64 {
        self.crowd_tolerance.unwrap_or(DEFAULT_CROWD_TOLERANCE)
    }

    /// Set the desired crowd level, clamping it into `[0.0, 1.0]`.
    ///
    /// Non-finite input clears the preference.
    pub fn set_crowd_tolerance(&mut self, tolerance: f64) {
        self.crowd_tolerance = clamp_ratio(tolerance);
        if self.crowd_tolerance != Some(tolerance) {
            log::debug!("crowd tolerance {tolerance} adjusted to {:?}", self.crowd_tolerance);
        }
    }

    /// Set the desired crowd level, rejecting values outside `[0.0, 1.0]`.
    ///
    /// # Errors
    /// Returns [`PreferenceError::CrowdToleranceOutOfRange`] when the value
    /// is not a finite fraction.
    pub fn try_set_crowd_tolerance(&mut self, tolerance: f64) -> Result<(), PreferenceError> {
        if !is_ratio(tolerance) {
            return Err(PreferenceError::CrowdToleranceOutOfRange { value: tolerance });
        }
        self.crowd_tolerance = Some(tolerance);
        Ok(())
    }

    /// Chaining form of [`UserPreferences::set_crowd_tolerance`].
    #[must_use]
    pub fn with_crowd_tolerance(mut self, tolerance: f64) -> Self {
        self.set_crowd_tolerance(tolerance);
        self
    }

    /// Report whether `hour` is one of the preferred hours.
    #[must_use]
    pub fn is_preferred_hour(&self, hour: u8) -> bool {
        self.preferred_hours.contains(&hour)
    }

    /// Iterate over the preferred hours in ascending order.
    pub fn preferred_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.preferred_hours.iter().copied()
    }

    /// Mark `hour` as preferred.
    ///
    /// Hours past 23 are accepted but never match a slot.
    pub fn add_preferred_hour(&mut self, hour: u8) {
        self.preferred_hours.insert(hour);
    }

    /// Mark `hour` as preferred, rejecting hours past 23.
    ///
    /// # Errors
    /// Returns [`PreferenceError::HourOutOfRange`] for hours outside
    /// `0..=23`.
    pub fn try_add_preferred_hour(&mut self, hour: u8) -> Result<(), PreferenceError> {
        if hour > 23 {
            return Err(PreferenceError::HourOutOfRange { hour });
        }
        self.add_preferred_hour(hour);
        Ok(())
    }

    /// Chaining form of [`UserPreferences::add_preferred_hour`].
    #[must_use]
    pub fn with_preferred_hour(mut self, hour: u8) -> Self {
        self.add_preferred_hour(hour);
        self
    }

    /// Mark every hour in `hours` as preferred.
    #[must_use]
    pub fn with_preferred_hours<I>(mut self, hours: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        self.preferred_hours.extend(hours);
        self
    }

    /// Return the target ratio for a demographic dimension, if present.
    ///
    /// Dimension names are matched case-insensitively.
    #[must_use]
    pub fn demographic_target(&self, dimension: &str) -> Option<f64> {
        self.demographic_targets
            .get(&normalise_name(dimension))
            .copied()
    }

    /// Iterate over `(dimension, target)` pairs in dimension order.
    pub fn demographic_targets(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.demographic_targets
            .iter()
            .map(|(dimension, target)| (dimension.as_str(), *target))
    }

    /// Insert or update a demographic target, clamping it into `[0.0, 1.0]`.
    ///
    /// Blank dimension names and non-finite targets are ignored.
    pub fn set_demographic_target(&mut self, dimension: &str, target: f64) {
        let key = normalise_name(dimension);
        let Some(clamped) = clamp_ratio(target) else {
            log::debug!("ignoring non-finite target for '{key}'");
            return;
        };
        if key.is_empty() {
            log::debug!("ignoring demographic target with a blank dimension");
            return;
        }
        self.demographic_targets.insert(key, clamped);
    }

    /// Insert or update a demographic target, rejecting invalid input.
    ///
    /// # Errors
    /// Returns [`PreferenceError::EmptyDimension`] for blank names and
    /// [`PreferenceError::TargetOutOfRange`] for targets outside
    /// `[0.0, 1.0]`.
    pub fn try_set_demographic_target(
        &mut self,
        dimension: &str,
        target: f64,
    ) -> Result<(), PreferenceError> {
        let key = normalise_name(dimension);
        if key.is_empty() {
            return Err(PreferenceError::EmptyDimension);
        }
        if !is_ratio(target) {
            return Err(PreferenceError::TargetOutOfRange {
                dimension: key,
                value: target,
            });
        }
        self.demographic_targets.insert(key, target);
        Ok(())
    }

    /// Chaining form of [`UserPreferences::set_demographic_target`].
    #[must_use]
    pub fn with_demographic_target(mut self, dimension: &str, target: f64) -> Self {
        self.set_demographic_target(dimension, target);
        self
    }

    /// Return the single-value gender preference, if any.
    #[must_use]
    pub const fn gender_preference(&self) -> Option<Gender> {
        self.gender
    }

    /// Set or clear the gender preference.
    pub const fn set_gender_preference(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    /// Prefer slots with a larger share of `gender`.
    #[must_use]
    pub const fn with_gender_preference(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Return the single-value ethnicity preference, if any.
    #[must_use]
    pub const fn ethnicity_preference(&self) -> Option<Ethnicity> {
        self.ethnicity
    }

    /// Set or clear the ethnicity preference.
    pub const fn set_ethnicity_preference(&mut self, ethnicity: Option<Ethnicity>) {
        self.ethnicity = ethnicity;
    }

    /// Prefer slots with a larger share of `ethnicity`.
    #[must_use]
    pub const fn with_ethnicity_preference(mut self, ethnicity: Ethnicity) -> Self {
        self.ethnicity = Some(ethnicity);
        self
    }

    /// Return the equipment names in priority order.
    #[must_use]
    pub fn equipment_priority(&self) -> &[String] {
        &self.equipment
    }

    /// Append an equipment name to the priority list.
    ///
    /// Names are matched case-insensitively; blank names are ignored.
    pub fn add_equipment(&mut self, name: impl Into<String>) {
        let raw: String = name.into();
        let key = normalise_name(&raw);
        if key.is_empty() {
            log::debug!("ignoring blank equipment name");
            return;
        }
        self.equipment.push(key);
    }

    /// Chaining form of [`UserPreferences::add_equipment`].
    #[must_use]
    pub fn with_equipment(mut self, name: impl Into<String>) -> Self {
        self.add_equipment(name);
        self
    }
}

fn clamp_ratio(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_record_uses_defaults() {
        let prefs = UserPreferences::new();
        assert_eq!(prefs.crowd_tolerance(), DEFAULT_CROWD_TOLERANCE);
        assert_eq!(prefs.preferred_hours().count(), 0);
        assert_eq!(prefs.demographic_targets().count(), 0);
        assert!(prefs.gender_preference().is_none());
        assert!(prefs.ethnicity_preference().is_none());
        assert!(prefs.equipment_priority().is_empty());
    }

    #[rstest]
    #[case(1.4, 1.0)]
    #[case(-0.2, 0.0)]
    #[case(0.3, 0.3)]
    fn lenient_tolerance_clamps(#[case] raw: f64, #[case] expected: f64) {
        let prefs = UserPreferences::new().with_crowd_tolerance(raw);
        assert_eq!(prefs.crowd_tolerance(), expected);
    }

    #[test]
    fn non_finite_tolerance_falls_back_to_default() {
        let prefs = UserPreferences::new()
            .with_crowd_tolerance(0.2)
            .with_crowd_tolerance(f64::NAN);
        assert_eq!(prefs.crowd_tolerance(), DEFAULT_CROWD_TOLERANCE);
    }

    #[rstest]
    #[case(1.01)]
    #[case(-0.01)]
    #[case(f64::INFINITY)]
    fn strict_tolerance_rejects_out_of_range(#[case] raw: f64) {
        let mut prefs = UserPreferences::new();
        let err = prefs.try_set_crowd_tolerance(raw).unwrap_err();
        assert!(matches!(err, PreferenceError::CrowdToleranceOutOfRange { .. }));
        assert_eq!(prefs.crowd_tolerance(), DEFAULT_CROWD_TOLERANCE);
    }

    #[test]
    fn dimensions_are_case_insensitive() {
        let prefs = UserPreferences::new().with_demographic_target(" Asian ", 0.3);
        assert_eq!(prefs.demographic_target("ASIAN"), Some(0.3));
        assert_eq!(prefs.demographic_targets().collect::<Vec<_>>(), vec![("asian", 0.3)]);
    }

    #[test]
    fn lenient_target_clamps_and_skips_blank_dimensions() {
        let prefs = UserPreferences::new()
            .with_demographic_target("male", 1.5)
            .with_demographic_target("  ", 0.5);
        assert_eq!(prefs.demographic_target("male"), Some(1.0));
        assert_eq!(prefs.demographic_targets().count(), 1);
    }

    #[test]
    fn strict_target_rejects_blank_dimension() {
        let mut prefs = UserPreferences::new();
        let err = prefs.try_set_demographic_target("", 0.5).unwrap_err();
        assert_eq!(err, PreferenceError::EmptyDimension);
    }

    #[test]
    fn strict_target_rejects_out_of_range() {
        let mut prefs = UserPreferences::new();
        let err = prefs.try_set_demographic_target("Female", 2.0).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::TargetOutOfRange {
                dimension: "female".to_owned(),
                value: 2.0,
            }
        );
    }

    #[test]
    fn strict_hour_rejects_past_midnight() {
        let mut prefs = UserPreferences::new();
        assert_eq!(
            prefs.try_add_preferred_hour(24),
            Err(PreferenceError::HourOutOfRange { hour: 24 })
        );
        assert!(prefs.try_add_preferred_hour(23).is_ok());
        assert!(prefs.is_preferred_hour(23));
    }

    #[test]
    fn preferred_hours_are_deduplicated_and_sorted() {
        let prefs = UserPreferences::new().with_preferred_hours([15, 9, 15]);
        assert_eq!(prefs.preferred_hours().collect::<Vec<_>>(), vec![9, 15]);
    }

    #[test]
    fn equipment_keeps_priority_order() {
        let prefs = UserPreferences::new()
            .with_equipment("squash")
            .with_equipment("cardio");
        assert_eq!(prefs.equipment_priority(), ["squash", "cardio"]);
    }

    #[test]
    fn equipment_names_are_folded_and_blanks_dropped() {
        let prefs = UserPreferences::new()
            .with_equipment(" Cardio ")
            .with_equipment("   ")
            .with_equipment("WEIGHT_ROOM");
        assert_eq!(prefs.equipment_priority(), ["cardio", "weight_room"]);
    }
}
