//! Static gym tables: opening hours, crowd estimates, demographic
//! composition, and the equipment catalog.
//!
//! Tables are plain immutable data. Build them once, validate them with
//! [`GymTables::validate`], and hand the engine a reference.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    TimeCategory, TimeSlot, Weekday, hour_label, is_ratio, normalise_name, parse_hour_label,
};

mod builtin;
mod error;

pub use error::TablesError;

/// Crowd level reported for hours missing from the crowd table.
pub const DEFAULT_CROWD_LEVEL: f64 = 0.5;

/// Latest hour at which a visit may start, whatever the closing time.
pub const LATEST_START_HOUR: u8 = 22;

/// The full set of tables the engine reads.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GymTables {
    /// Opening window per weekday.
    pub hours: OperatingHours,
    /// Expected crowd level per weekday and hour.
    pub crowd: CrowdTable,
    /// Demographic composition per time category.
    pub demographics: DemographicTable,
    /// Equipment that can trigger bonuses or penalties.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: EquipmentCatalog,
}

impl GymTables {
    /// Check every table invariant.
    ///
    /// # Errors
    /// Returns the first [`TablesError`] found, checking hours, crowd
    /// levels, demographics, and equipment in that order.
    pub fn validate(&self) -> Result<(), TablesError> {
        self.hours.validate()?;
        self.crowd.validate()?;
        self.demographics.validate()?;
        self.equipment.validate()
    }
}

/// Opening and closing hour for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpeningWindow {
    /// Hour the gym opens.
    pub open: u8,
    /// Hour the gym closes; `24` means midnight.
    pub close: u8,
}

impl OpeningWindow {
    /// Construct a window from `open` to `close`.
    #[must_use]
    pub const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    /// Return the hours at which a visit may start.
    ///
    /// The range runs from the opening hour to the hour before closing,
    /// capped at [`LATEST_START_HOUR`].
    #[must_use]
    pub fn start_hours(self) -> RangeInclusive<u8> {
        let last = self.close.saturating_sub(1).min(LATEST_START_HOUR);
        self.open..=last
    }

    const fn is_valid(self) -> bool {
        self.open < self.close && self.close <= 24
    }
}

/// Opening windows keyed by weekday. Days without a window are closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OperatingHours {
    windows: BTreeMap<Weekday, OpeningWindow>,
}

impl OperatingHours {
    /// Construct a timetable with every day closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
        }
    }

    /// Return the opening window for `day`, if the gym opens that day.
    #[must_use]
    pub fn window(&self, day: Weekday) -> Option<OpeningWindow> {
        self.windows.get(&day).copied()
    }

    /// Set the opening window for `day`.
    pub fn insert(&mut self, day: Weekday, window: OpeningWindow) {
        self.windows.insert(day, window);
    }

    /// Chaining form of [`OperatingHours::insert`].
    #[must_use]
    pub fn with_window(mut self, day: Weekday, window: OpeningWindow) -> Self {
        self.insert(day, window);
        self
    }

    /// Enumerate every candidate slot, day-major then hour-minor.
    ///
    /// # Examples
    /// ```
    /// use gymslot_core::{OpeningWindow, OperatingHours, TimeSlot, Weekday};
    ///
    /// let hours = OperatingHours::new().with_window(Weekday::Friday, OpeningWindow::new(21, 24));
    /// let slots: Vec<_> = hours.slots().collect();
    /// assert_eq!(slots, [TimeSlot::new(Weekday::Friday, 21), TimeSlot::new(Weekday::Friday, 22)]);
    /// ```
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        Weekday::ALL.into_iter().flat_map(move |day| {
            self.window(day)
                .into_iter()
                .flat_map(OpeningWindow::start_hours)
                .map(move |hour| TimeSlot::new(day, hour))
        })
    }

    fn validate(&self) -> Result<(), TablesError> {
        match self.windows.iter().find(|(_, window)| !window.is_valid()) {
            Some((&day, window)) => Err(TablesError::InvalidOpeningWindow {
                day,
                open: window.open,
                close: window.close,
            }),
            None => Ok(()),
        }
    }
}

/// Sparse crowd levels keyed by weekday and `HH:00` label.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CrowdTable {
    levels: BTreeMap<Weekday, BTreeMap<String, f64>>,
}

impl CrowdTable {
    /// Construct an empty table; every lookup yields the default level.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Return the tabulated crowd level, if the hour is listed.
    #[must_use]
    pub fn get(&self, day: Weekday, hour: u8) -> Option<f64> {
        self.levels
            .get(&day)
            .and_then(|hours| hours.get(&hour_label(hour)))
            .copied()
    }

    /// Return the crowd level, or [`DEFAULT_CROWD_LEVEL`] when unlisted.
    ///
    /// # Examples
    /// ```
    /// use gymslot_core::{CrowdTable, DEFAULT_CROWD_LEVEL, Weekday};
    ///
    /// let table = CrowdTable::new().with_level(Weekday::Monday, 6, 0.2);
    /// assert_eq!(table.level(Weekday::Monday, 6), 0.2);
    /// assert_eq!(table.level(Weekday::Monday, 7), DEFAULT_CROWD_LEVEL);
    /// ```
    #[must_use]
    pub fn level(&self, day: Weekday, hour: u8) -> f64 {
        self.get(day, hour).unwrap_or(DEFAULT_CROWD_LEVEL)
    }

    /// Set the crowd level for `day` at `hour`.
    pub fn insert(&mut self, day: Weekday, hour: u8, level: f64) {
        self.levels
            .entry(day)
            .or_default()
            .insert(hour_label(hour), level);
    }

    /// Chaining form of [`CrowdTable::insert`].
    #[must_use]
    pub fn with_level(mut self, day: Weekday, hour: u8, level: f64) -> Self {
        self.insert(day, hour, level);
        self
    }

    fn validate(&self) -> Result<(), TablesError> {
        for (&day, hours) in &self.levels {
            for (label, &level) in hours {
                if parse_hour_label(label).is_none() {
                    return Err(TablesError::InvalidHourLabel {
                        day,
                        label: label.clone(),
                    });
                }
                if !is_ratio(level) {
                    return Err(TablesError::CrowdLevelOutOfRange {
                        day,
                        label: label.clone(),
                        level,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Demographic ratios keyed by time category and dimension name.
///
/// Dimension names are stored trimmed and lower-cased, whether inserted
/// directly or read from JSON.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DemographicTable {
    ratios: BTreeMap<TimeCategory, BTreeMap<String, f64>>,
}

impl DemographicTable {
    /// Construct an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ratios: BTreeMap::new(),
        }
    }

    /// Return the ratio of `dimension` during `category`, if tabulated.
    ///
    /// Dimension names are matched case-insensitively.
    #[must_use]
    pub fn ratio(&self, category: TimeCategory, dimension: &str) -> Option<f64> {
        self.ratios
            .get(&category)
            .and_then(|dimensions| dimensions.get(&normalise_name(dimension)))
            .copied()
    }

    /// Set the ratio of `dimension` during `category`.
    pub fn insert(&mut self, category: TimeCategory, dimension: &str, ratio: f64) {
        self.ratios
            .entry(category)
            .or_default()
            .insert(normalise_name(dimension), ratio);
    }

    fn validate(&self) -> Result<(), TablesError> {
        for (&category, dimensions) in &self.ratios {
            for (dimension, &ratio) in dimensions {
                if dimension.trim().is_empty() {
                    return Err(TablesError::BlankDimension { category });
                }
                if !is_ratio(ratio) {
                    return Err(TablesError::RatioOutOfRange {
                        category,
                        dimension: dimension.clone(),
                        ratio,
                    });
                }
            }
        }
        Ok(())
    }
}

/// How freely a piece of equipment can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Availability {
    /// Open for the gym's full hours.
    Extended,
    /// Open for a reduced set of hours.
    Limited,
    /// Shared with scheduled activities.
    Variable,
}

/// Descriptive metadata for one piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentProfile {
    /// Availability class.
    pub availability: Availability,
    /// Typical wait at peak times, in minutes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub peak_wait_minutes: Option<u16>,
    /// Chance that a booking clashes with scheduled use.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub conflict_risk: Option<f64>,
}

impl EquipmentProfile {
    /// Construct a profile with only an availability class.
    #[must_use]
    pub const fn new(availability: Availability) -> Self {
        Self {
            availability,
            peak_wait_minutes: None,
            conflict_risk: None,
        }
    }

    /// Record the typical peak wait.
    #[must_use]
    pub const fn with_peak_wait_minutes(mut self, minutes: u16) -> Self {
        self.peak_wait_minutes = Some(minutes);
        self
    }

    /// Record the conflict risk.
    #[must_use]
    pub const fn with_conflict_risk(mut self, risk: f64) -> Self {
        self.conflict_risk = Some(risk);
        self
    }
}

/// Equipment known to the gym, keyed by name.
///
/// Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EquipmentCatalog {
    items: BTreeMap<String, EquipmentProfile>,
}

impl EquipmentCatalog {
    /// Construct an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Return the profile for `name`, if listed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EquipmentProfile> {
        self.items.get(&normalise_name(name))
    }

    /// Report whether `name` is listed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&normalise_name(name))
    }

    /// Iterate over equipment names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }

    /// Add or replace an item.
    pub fn insert(&mut self, name: impl Into<String>, profile: EquipmentProfile) {
        let raw: String = name.into();
        self.items.insert(normalise_name(&raw), profile);
    }

    /// Chaining form of [`EquipmentCatalog::insert`].
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, profile: EquipmentProfile) -> Self {
        self.insert(name, profile);
        self
    }

    fn validate(&self) -> Result<(), TablesError> {
        if self.items.keys().any(|name| name.is_empty()) {
            return Err(TablesError::BlankEquipmentName);
        }
        for (name, profile) in &self.items {
            if let Some(risk) = profile.conflict_risk
                && !is_ratio(risk)
            {
                return Err(TablesError::ConflictRiskOutOfRange {
                    name: name.clone(),
                    risk,
                });
            }
        }
        Ok(())
    }
}

/// Re-key a JSON map by normalised name, rejecting keys that collide.
#[cfg(feature = "serde")]
fn normalised_keys<V, E>(raw: BTreeMap<String, V>) -> Result<BTreeMap<String, V>, E>
where
    E: serde::de::Error,
{
    let mut normalised = BTreeMap::new();
    for (name, value) in raw {
        if normalised.insert(normalise_name(&name), value).is_some() {
            return Err(E::custom(format!(
                "'{name}' repeats another entry once case and surrounding spaces are ignored"
            )));
        }
    }
    Ok(normalised)
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DemographicTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<TimeCategory, BTreeMap<String, f64>>::deserialize(deserializer)?;
        let ratios = raw
            .into_iter()
            .map(|(category, dimensions)| {
                normalised_keys::<_, D::Error>(dimensions).map(|keyed| (category, keyed))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { ratios })
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EquipmentCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, EquipmentProfile>::deserialize(deserializer)?;
        Ok(Self {
            items: normalised_keys::<_, D::Error>(raw)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tables() -> GymTables {
        GymTables::builtin()
    }

    #[rstest]
    fn builtin_tables_are_valid(tables: GymTables) {
        assert_eq!(tables.validate(), Ok(()));
    }

    #[rstest]
    fn builtin_weekend_opens_later(tables: GymTables) {
        assert_eq!(tables.hours.window(Weekday::Monday), Some(OpeningWindow::new(6, 23)));
        assert_eq!(tables.hours.window(Weekday::Sunday), Some(OpeningWindow::new(9, 23)));
    }

    #[rstest]
    fn builtin_slots_cover_open_hours(tables: GymTables) {
        let slots: Vec<_> = tables.hours.slots().collect();
        assert_eq!(slots.len(), 5 * 17 + 2 * 14);
        assert_eq!(slots.first(), Some(&TimeSlot::new(Weekday::Monday, 6)));
        assert_eq!(slots.last(), Some(&TimeSlot::new(Weekday::Sunday, 22)));
    }

    #[rstest]
    fn builtin_crowd_table_covers_every_open_hour(tables: GymTables) {
        for slot in tables.hours.slots() {
            assert!(
                tables.crowd.get(slot.day, slot.hour).is_some(),
                "{} {} has no crowd level",
                slot.day,
                slot.label()
            );
        }
        assert_eq!(tables.crowd.get(Weekday::Tuesday, 12), Some(0.8));
        assert_eq!(tables.crowd.get(Weekday::Saturday, 9), Some(0.4));
        assert_eq!(tables.crowd.get(Weekday::Sunday, 22), Some(0.3));
        assert_eq!(tables.crowd.get(Weekday::Saturday, 8), None);
        assert_eq!(tables.crowd.level(Weekday::Monday, 23), DEFAULT_CROWD_LEVEL);
    }

    #[rstest]
    fn builtin_demographics_cover_every_category(tables: GymTables) {
        for category in TimeCategory::ALL {
            for dimension in ["male", "female", "asian", "caucasian", "other"] {
                assert!(
                    tables.demographics.ratio(category, dimension).is_some(),
                    "{category} lacks {dimension}"
                );
            }
        }
        assert_eq!(tables.demographics.ratio(TimeCategory::Midday, "FEMALE"), Some(0.40));
        assert_eq!(tables.demographics.ratio(TimeCategory::Midday, "height"), None);
    }

    #[rstest]
    fn builtin_equipment_lists_four_items(tables: GymTables) {
        let names: Vec<_> = tables.equipment.names().collect();
        assert_eq!(names, ["basketball", "cardio", "squash", "weight_room"]);
        let squash = tables.equipment.get("squash").copied();
        assert_eq!(
            squash,
            Some(EquipmentProfile::new(Availability::Limited).with_conflict_risk(0.4))
        );
    }

    #[rstest]
    #[case(OpeningWindow::new(6, 6))]
    #[case(OpeningWindow::new(9, 8))]
    #[case(OpeningWindow::new(6, 25))]
    fn invalid_windows_are_rejected(#[case] window: OpeningWindow) {
        let tables = GymTables {
            hours: OperatingHours::new().with_window(Weekday::Friday, window),
            ..GymTables::default()
        };
        assert_eq!(
            tables.validate(),
            Err(TablesError::InvalidOpeningWindow {
                day: Weekday::Friday,
                open: window.open,
                close: window.close,
            })
        );
    }

    #[rstest]
    #[case(1.2)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn crowd_levels_must_be_ratios(#[case] level: f64) {
        let tables = GymTables {
            crowd: CrowdTable::new().with_level(Weekday::Monday, 7, level),
            ..GymTables::default()
        };
        assert!(matches!(
            tables.validate(),
            Err(TablesError::CrowdLevelOutOfRange { day: Weekday::Monday, .. })
        ));
    }

    #[test]
    fn demographic_ratios_must_be_ratios() {
        let mut demographics = DemographicTable::new();
        demographics.insert(TimeCategory::Afternoon, "female", 1.5);
        let tables = GymTables {
            demographics,
            ..GymTables::default()
        };
        assert_eq!(
            tables.validate(),
            Err(TablesError::RatioOutOfRange {
                category: TimeCategory::Afternoon,
                dimension: "female".to_owned(),
                ratio: 1.5,
            })
        );
    }

    #[test]
    fn conflict_risk_must_be_a_ratio() {
        let tables = GymTables {
            equipment: EquipmentCatalog::new().with_item(
                "climbing_wall",
                EquipmentProfile::new(Availability::Limited).with_conflict_risk(3.0),
            ),
            ..GymTables::default()
        };
        assert!(matches!(
            tables.validate(),
            Err(TablesError::ConflictRiskOutOfRange { .. })
        ));
    }

    #[test]
    fn equipment_names_match_case_insensitively() {
        let catalog = EquipmentCatalog::new()
            .with_item("Climbing_Wall", EquipmentProfile::new(Availability::Limited));
        assert!(catalog.contains("climbing_wall"));
        assert!(catalog.contains(" CLIMBING_WALL "));
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["climbing_wall"]);
    }

    #[test]
    fn blank_equipment_names_are_rejected() {
        let tables = GymTables {
            equipment: EquipmentCatalog::new()
                .with_item("  ", EquipmentProfile::new(Availability::Extended)),
            ..GymTables::default()
        };
        assert_eq!(tables.validate(), Err(TablesError::BlankEquipmentName));
    }

    #[test]
    fn late_opening_yields_no_slots() {
        let hours = OperatingHours::new().with_window(Weekday::Monday, OpeningWindow::new(23, 24));
        assert_eq!(hours.slots().count(), 0);
    }

    #[test]
    fn closed_days_are_skipped() {
        let hours = OperatingHours::new()
            .with_window(Weekday::Wednesday, OpeningWindow::new(10, 12));
        let slots: Vec<_> = hours.slots().collect();
        assert_eq!(
            slots,
            [
                TimeSlot::new(Weekday::Wednesday, 10),
                TimeSlot::new(Weekday::Wednesday, 11),
            ]
        );
    }
}
