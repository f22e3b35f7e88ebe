use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::location::NOT_APPLICABLE;

/// A user's progressive narrowing of a location, one value per level.
///
/// An empty string means the level has not been chosen yet. A value is only
/// meaningful when every level before it is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub division: String,
    pub district: String,
    pub thana: String,
    pub union: String,
    pub area: String,
}

impl Selections {
    /// Builds a selection from a five-tuple, outermost level first.
    #[must_use]
    pub fn from_path(path: [&str; 5]) -> Self {
        let [division, district, thana, union, area] = path;
        Self {
            division: division.to_string(),
            district: district.to_string(),
            thana: thana.to_string(),
            union: union.to_string(),
            area: area.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Division => &self.division,
            Level::District => &self.district,
            Level::Thana => &self.thana,
            Level::Union => &self.union,
            Level::Area => &self.area,
        }
    }

    pub(crate) fn slot_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::Division => &mut self.division,
            Level::District => &mut self.district,
            Level::Thana => &mut self.thana,
            Level::Union => &mut self.union,
            Level::Area => &mut self.area,
        }
    }

    #[must_use]
    pub fn is_chosen(&self, level: Level) -> bool {
        !self.get(level).is_empty()
    }

    /// Returns `true` when every level before `level` has a value.
    #[must_use]
    pub fn prior_complete(&self, level: Level) -> bool {
        level.prior().iter().all(|&prior| self.is_chosen(prior))
    }

    /// Returns `true` when all five levels have a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Level::ALL.iter().all(|&level| self.is_chosen(level))
    }

    /// The first level without a value, if any.
    #[must_use]
    pub fn next_unset(&self) -> Option<Level> {
        Level::ALL.into_iter().find(|&level| !self.is_chosen(level))
    }

    /// Reads every unset optional level as [`NOT_APPLICABLE`], the way
    /// records without a union or area are normalized.
    #[must_use]
    pub fn with_optional_filled(mut self) -> Self {
        for level in Level::ALL.into_iter().filter(|level| level.is_optional()) {
            let slot = self.slot_mut(level);
            if slot.is_empty() {
                NOT_APPLICABLE.clone_into(slot);
            }
        }
        self
    }

    /// Clears every level.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Selections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chosen: Vec<&str> = Level::ALL
            .iter()
            .map(|&level| self.get(level))
            .take_while(|value| !value.is_empty())
            .collect();
        if chosen.is_empty() {
            f.write_str("nothing selected")
        } else {
            f.write_str(&chosen.join(" / "))
        }
    }
}
