//! The five administrative levels of a location, in cascade order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

static CASCADE: [Level; 5] = Level::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Division,
    District,
    Thana,
    Union,
    Area,
}

impl Level {
    /// Every level, outermost first.
    pub const ALL: [Level; 5] = [
        Level::Division,
        Level::District,
        Level::Thana,
        Level::Union,
        Level::Area,
    ];

    /// Zero-based position in [`Level::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Level::Division => 0,
            Level::District => 1,
            Level::Thana => 2,
            Level::Union => 3,
            Level::Area => 4,
        }
    }

    /// The level directly above this one, or `None` for [`Level::Division`].
    #[must_use]
    pub const fn parent(self) -> Option<Level> {
        match self {
            Level::Division => None,
            Level::District => Some(Level::Division),
            Level::Thana => Some(Level::District),
            Level::Union => Some(Level::Thana),
            Level::Area => Some(Level::Union),
        }
    }

    /// Levels chosen before this one.
    #[must_use]
    pub fn prior(self) -> &'static [Level] {
        &CASCADE[..self.index()]
    }

    /// Levels that depend on this one and are invalidated when it changes.
    #[must_use]
    pub fn deeper(self) -> &'static [Level] {
        &CASCADE[self.index() + 1..]
    }

    /// Whether a record may omit this level (and be read as `"N/A"`).
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Level::Union | Level::Area)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Division => "division",
            Level::District => "district",
            Level::Thana => "thana",
            Level::Union => "union",
            Level::Area => "area",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location level '{0}'; expected one of division, district, thana, union, area")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "division" => Ok(Level::Division),
            "district" => Ok(Level::District),
            "thana" | "upazila" => Ok(Level::Thana),
            "union" => Ok(Level::Union),
            "area" => Ok(Level::Area),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_cascade_order() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn deeper_of_division_is_everything_else() {
        assert_eq!(
            Level::Division.deeper(),
            &[Level::District, Level::Thana, Level::Union, Level::Area]
        );
        assert!(Level::Area.deeper().is_empty());
    }

    #[test]
    fn prior_of_thana() {
        assert_eq!(Level::Thana.prior(), &[Level::Division, Level::District]);
        assert!(Level::Division.prior().is_empty());
    }

    #[test]
    fn parent_chain() {
        assert_eq!(Level::Division.parent(), None);
        assert_eq!(Level::Area.parent(), Some(Level::Union));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("District".parse::<Level>().unwrap(), Level::District);
        assert_eq!(" AREA ".parse::<Level>().unwrap(), Level::Area);
        assert_eq!("upazila".parse::<Level>().unwrap(), Level::Thana);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = "ward".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("ward"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }
}
