//! Hand-authored default tables.

use super::{
    Availability, CrowdTable, DemographicTable, EquipmentCatalog, EquipmentProfile, GymTables,
    OpeningWindow, OperatingHours,
};
use crate::demographic::{ASIAN, CAUCASIAN, FEMALE, MALE, OTHER};
use crate::{TimeCategory, Weekday};

const WEEKDAY_WINDOW: OpeningWindow = OpeningWindow { open: 6, close: 23 };
const WEEKEND_WINDOW: OpeningWindow = OpeningWindow { open: 9, close: 23 };

// Crowd level for each start hour, beginning at the day's opening hour.
const CROWD_LEVELS: [(Weekday, &[f64]); 7] = [
    (
        Weekday::Monday,
        &[
            0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.9, 0.8, 0.7, 0.6, 0.7, 0.8, 0.95, 0.9, 0.7, 0.5, 0.3,
        ],
    ),
    (
        Weekday::Tuesday,
        &[
            0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.7, 0.6, 0.7, 0.8, 0.9, 0.95, 0.85, 0.6, 0.4, 0.2,
        ],
    ),
    (
        Weekday::Wednesday,
        &[
            0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.9, 0.8, 0.7, 0.6, 0.7, 0.8, 0.95, 0.9, 0.7, 0.5, 0.3,
        ],
    ),
    (
        Weekday::Thursday,
        &[
            0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.7, 0.6, 0.7, 0.8, 0.9, 0.95, 0.85, 0.6, 0.4, 0.2,
        ],
    ),
    (
        Weekday::Friday,
        &[
            0.1, 0.2, 0.3, 0.3, 0.4, 0.5, 0.7, 0.6, 0.5, 0.5, 0.6, 0.7, 0.9, 0.8, 0.7, 0.6, 0.4,
        ],
    ),
    (Weekday::Saturday, &[0.4, 0.5, 0.6, 0.7, 0.8, 0.8, 0.8, 0.8, 0.8, 0.9, 0.8, 0.7, 0.6, 0.4]),
    (Weekday::Sunday, &[0.3, 0.4, 0.5, 0.5, 0.6, 0.6, 0.7, 0.7, 0.7, 0.8, 0.7, 0.6, 0.4, 0.3]),
];

// Columns: male, female, asian, caucasian, other.
const DEMOGRAPHICS: [(TimeCategory, [f64; 5]); 6] = [
    (TimeCategory::EarlyMorning, [0.75, 0.25, 0.45, 0.40, 0.15]),
    (TimeCategory::MidMorning, [0.65, 0.35, 0.40, 0.45, 0.15]),
    (TimeCategory::Midday, [0.60, 0.40, 0.35, 0.50, 0.15]),
    (TimeCategory::Afternoon, [0.55, 0.45, 0.40, 0.45, 0.15]),
    (TimeCategory::EveningPeak, [0.70, 0.30, 0.45, 0.40, 0.15]),
    (TimeCategory::LateEvening, [0.75, 0.25, 0.50, 0.35, 0.15]),
];

const DIMENSIONS: [&str; 5] = [MALE, FEMALE, ASIAN, CAUCASIAN, OTHER];

impl GymTables {
    /// Return the built-in timetable, crowd estimates, demographics, and
    /// equipment catalog.
    ///
    /// # Examples
    /// ```
    /// use gymslot_core::{GymTables, Weekday};
    ///
    /// let tables = GymTables::builtin();
    /// assert!(tables.validate().is_ok());
    /// assert_eq!(tables.crowd.level(Weekday::Monday, 18), 0.95);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            hours: builtin_hours(),
            crowd: builtin_crowd(),
            demographics: builtin_demographics(),
            equipment: builtin_equipment(),
        }
    }
}

fn builtin_hours() -> OperatingHours {
    Weekday::ALL
        .into_iter()
        .fold(OperatingHours::new(), |hours, day| {
            let window = if day.is_weekend() {
                WEEKEND_WINDOW
            } else {
                WEEKDAY_WINDOW
            };
            hours.with_window(day, window)
        })
}

fn builtin_crowd() -> CrowdTable {
    let mut table = CrowdTable::new();
    for (day, levels) in CROWD_LEVELS {
        let open = if day.is_weekend() {
            WEEKEND_WINDOW.open
        } else {
            WEEKDAY_WINDOW.open
        };
        for (hour, &level) in (open..).zip(levels) {
            table.insert(day, hour, level);
        }
    }
    table
}

fn builtin_demographics() -> DemographicTable {
    let mut table = DemographicTable::new();
    for (category, ratios) in DEMOGRAPHICS {
        for (dimension, ratio) in DIMENSIONS.into_iter().zip(ratios) {
            table.insert(category, dimension, ratio);
        }
    }
    table
}

fn builtin_equipment() -> EquipmentCatalog {
    EquipmentCatalog::new()
        .with_item(
            "weight_room",
            EquipmentProfile::new(Availability::Extended).with_peak_wait_minutes(15),
        )
        .with_item(
            "cardio",
            EquipmentProfile::new(Availability::Extended).with_peak_wait_minutes(10),
        )
        .with_item(
            "basketball",
            EquipmentProfile::new(Availability::Variable).with_conflict_risk(0.3),
        )
        .with_item(
            "squash",
            EquipmentProfile::new(Availability::Limited).with_conflict_risk(0.4),
        )
}
