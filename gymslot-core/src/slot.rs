//! Weekly time slots and their `HH:00` labels.

use crate::{TimeCategory, Weekday};

/// One bookable hour in the weekly timetable.
///
/// # Examples
/// ```
/// use gymslot_core::{TimeCategory, TimeSlot, Weekday};
///
/// let slot = TimeSlot::new(Weekday::Tuesday, 7);
/// assert_eq!(slot.label(), "07:00");
/// assert_eq!(slot.category(), TimeCategory::EarlyMorning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Hour of the day, `0..=23`.
    pub hour: u8,
}

impl TimeSlot {
    /// Construct a slot for `day` at `hour`.
    #[must_use]
    pub const fn new(day: Weekday, hour: u8) -> Self {
        Self { day, hour }
    }

    /// Return the zero-padded `HH:00` label for the slot's hour.
    #[must_use]
    pub fn label(&self) -> String {
        hour_label(self.hour)
    }

    /// Return the time category the slot's hour falls into.
    #[must_use]
    pub const fn category(&self) -> TimeCategory {
        TimeCategory::from_hour(self.hour)
    }
}

/// Format an hour as the zero-padded `HH:00` label used by crowd tables.
///
/// # Examples
/// ```
/// use gymslot_core::hour_label;
///
/// assert_eq!(hour_label(6), "06:00");
/// assert_eq!(hour_label(21), "21:00");
/// ```
#[must_use]
pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Parse an `HH:00` label back into an hour.
///
/// Returns `None` unless the label is two digits naming an hour in
/// `0..=23` followed by `:00`.
///
/// # Examples
/// ```
/// use gymslot_core::parse_hour_label;
///
/// assert_eq!(parse_hour_label("09:00"), Some(9));
/// assert_eq!(parse_hour_label("9:00"), None);
/// assert_eq!(parse_hour_label("24:00"), None);
/// ```
#[must_use]
pub fn parse_hour_label(label: &str) -> Option<u8> {
    let (hours, minutes) = label.split_once(':')?;
    if hours.len() != 2 || minutes != "00" || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    hours.parse::<u8>().ok().filter(|hour| *hour < 24)
}
