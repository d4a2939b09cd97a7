//! Demographic dimensions used by the static composition tables.

/// Dimension name for the share of male members.
pub const MALE: &str = "male";
/// Dimension name for the share of female members.
pub const FEMALE: &str = "female";
/// Dimension name for the share of Asian members.
pub const ASIAN: &str = "asian";
/// Dimension name for the share of Caucasian members.
pub const CAUCASIAN: &str = "caucasian";
/// Dimension name for the share of members of other ethnicities.
pub const OTHER: &str = "other";

/// A single-value gender preference.
///
/// Absence of a preference means "both".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Prefer slots with more male members.
    Male,
    /// Prefer slots with more female members.
    Female,
}

impl Gender {
    /// Return the demographic dimension the preference reads.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            Self::Male => MALE,
            Self::Female => FEMALE,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dimension())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            MALE => Ok(Self::Male),
            FEMALE => Ok(Self::Female),
            _ => Err(format!("unknown gender preference '{s}'")),
        }
    }
}

/// A single-value ethnicity preference.
///
/// Absence of a preference means "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ethnicity {
    /// Prefer slots with more Asian members.
    Asian,
    /// Prefer slots with more Caucasian members.
    Caucasian,
    /// Prefer slots with more members of other ethnicities.
    Other,
}

impl Ethnicity {
    /// Return the demographic dimension the preference reads.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            Self::Asian => ASIAN,
            Self::Caucasian => CAUCASIAN,
            Self::Other => OTHER,
        }
    }
}

impl std::fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dimension())
    }
}

impl std::str::FromStr for Ethnicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            ASIAN => Ok(Self::Asian),
            CAUCASIAN => Ok(Self::Caucasian),
            OTHER => Ok(Self::Other),
            _ => Err(format!("unknown ethnicity preference '{s}'")),
        }
    }
}
