//! Time categories: the six fixed bands a day is divided into.
//!
//! Category assignment depends on the hour alone, never on the day.
//!
//! # Examples
//! ```
//! use gymslot_core::TimeCategory;
//!
//! assert_eq!(TimeCategory::from_hour(6), TimeCategory::EarlyMorning);
//! assert_eq!(TimeCategory::from_hour(2), TimeCategory::LateEvening);
//! assert_eq!(TimeCategory::EveningPeak.to_string(), "evening_peak");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A band of the day with its own demographic profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeCategory {
    /// Hours `5..9`.
    EarlyMorning,
    /// Hours `9..12`.
    MidMorning,
    /// Hours `12..15`.
    Midday,
    /// Hours `15..17`.
    Afternoon,
    /// Hours `17..20`.
    EveningPeak,
    /// Hours `20..24` and the small hours before `5`.
    LateEvening,
}

impl TimeCategory {
    /// Every category in the order the day passes through them.
    pub const ALL: [Self; 6] = [
        Self::EarlyMorning,
        Self::MidMorning,
        Self::Midday,
        Self::Afternoon,
        Self::EveningPeak,
        Self::LateEvening,
    ];

    /// Categorise an hour of the day.
    ///
    /// Boundaries are half-open. Anything outside the daytime bands,
    /// including out-of-range hours, is [`TimeCategory::LateEvening`].
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            5..9 => Self::EarlyMorning,
            9..12 => Self::MidMorning,
            12..15 => Self::Midday,
            15..17 => Self::Afternoon,
            17..20 => Self::EveningPeak,
            _ => Self::LateEvening,
        }
    }

    /// Return the category's snake-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EarlyMorning => "early_morning",
            Self::MidMorning => "mid_morning",
            Self::Midday => "midday",
            Self::Afternoon => "afternoon",
            Self::EveningPeak => "evening_peak",
            Self::LateEvening => "late_evening",
        }
    }

    /// Return an upper-case, space-separated label for display.
    ///
    /// # Examples
    /// ```
    /// use gymslot_core::TimeCategory;
    ///
    /// assert_eq!(TimeCategory::MidMorning.headline(), "MID MORNING");
    /// ```
    #[must_use]
    pub fn headline(self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl std::fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("unknown time category '{s}'"))
    }
}
