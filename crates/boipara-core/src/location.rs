use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::selection::Selections;

/// Stand-in value for a record that has no union or area.
///
/// A real region literally named `"N/A"` compares equal to a missing one.
pub const NOT_APPLICABLE: &str = "N/A";

/// One precise administrative region, as served by the backend's location list.
///
/// Read-only reference data: the client uses it to turn a shop's address
/// into a `shopLocationId`, never writes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub division: String,
    pub district: String,
    pub thana: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl LocationRecord {
    /// Returns the value at `level`, with a missing or blank optional level
    /// read as [`NOT_APPLICABLE`].
    #[must_use]
    pub fn value(&self, level: Level) -> &str {
        let raw = match level {
            Level::Division => Some(self.division.as_str()),
            Level::District => Some(self.district.as_str()),
            Level::Thana => Some(self.thana.as_str()),
            Level::Union => self.union.as_deref(),
            Level::Area => self.area.as_deref(),
        };
        match raw {
            Some(v) if !(level.is_optional() && v.trim().is_empty()) => v,
            _ => NOT_APPLICABLE,
        }
    }

    /// Returns `true` if every level chosen in `selections` equals this
    /// record's value at that level. Unchosen levels are ignored.
    #[must_use]
    pub fn matches_chosen(&self, selections: &Selections, levels: &[Level]) -> bool {
        levels.iter().all(|&level| {
            let chosen = selections.get(level);
            chosen.is_empty() || self.value(level) == chosen
        })
    }

    /// Returns `true` if all five normalized fields equal `selections` exactly.
    #[must_use]
    pub fn matches(&self, selections: &Selections) -> bool {
        Level::ALL
            .iter()
            .all(|&level| self.value(level) == selections.get(level))
    }

    /// The normalized five-tuple, outermost level first.
    #[must_use]
    pub fn path(&self) -> [&str; 5] {
        Level::ALL.map(|level| self.value(level))
    }
}
