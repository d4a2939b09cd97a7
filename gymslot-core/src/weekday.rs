//! Days of the week in the order a gym timetable lists them.
//!
//! # Examples
//! ```
//! use gymslot_core::Weekday;
//!
//! assert_eq!(Weekday::Monday.as_str(), "Monday");
//! assert_eq!(Weekday::ALL.len(), 7);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Return the day's canonical name.
    ///
    /// # Examples
    /// ```
    /// use gymslot_core::Weekday;
    ///
    /// assert_eq!(Weekday::Sunday.as_str(), "Sunday");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Report whether the day falls on a weekend.
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown weekday '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("monday", Weekday::Monday)]
    #[case("SATURDAY", Weekday::Saturday)]
    #[case(" Sunday ", Weekday::Sunday)]
    fn parsing_ignores_case(#[case] raw: &str, #[case] expected: Weekday) {
        assert_eq!(Weekday::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Weekday::from_str("funday").unwrap_err();
        assert!(err.contains("unknown weekday"));
    }

    #[test]
    fn all_days_are_ordered_monday_first() {
        assert_eq!(Weekday::ALL.first(), Some(&Weekday::Monday));
        assert_eq!(Weekday::ALL.last(), Some(&Weekday::Sunday));
        assert!(Weekday::ALL.is_sorted());
    }

    #[test]
    fn only_saturday_and_sunday_are_weekend() {
        let weekend: Vec<_> = Weekday::ALL
            .into_iter()
            .filter(|day| day.is_weekend())
            .collect();
        assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
    }
}
