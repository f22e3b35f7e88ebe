//! Cascading location filtering over an already-fetched location list.
//!
//! Everything here is a pure function of `(locations, selections)`: no hidden
//! state, no I/O. [`crate::picker::LocationPicker`] wraps these for form use.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::level::Level;
use crate::location::LocationRecord;
use crate::selection::Selections;

/// Outcome of mapping a selection back to a location identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "id", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly the record with this `_id` matches the five-tuple.
    Resolved(String),
    /// The selection is complete but no record matches it.
    NoMatch,
    /// At least one level is still unset.
    Incomplete,
}

impl Resolution {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(id) => Some(id),
            Resolution::NoMatch | Resolution::Incomplete => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Inline warning shown next to the form while submission is blocked.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::NoMatch => {
                Some("No location matches this selection; choose a different area before submitting.")
            }
            Resolution::Incomplete => Some("Select division, district, thana, union and area."),
        }
    }
}

/// Distinct values available at `level`, given the levels already chosen
/// before it.
///
/// Returns an empty list when the location list is empty or when any level
/// before `level` is still unset. Values are sorted lexicographically.
#[must_use]
pub fn options_for(locations: &[LocationRecord], level: Level, prior: &Selections) -> Vec<String> {
    if !prior.prior_complete(level) {
        return Vec::new();
    }

    let prior_levels = level.prior();
    locations
        .iter()
        .filter(|record| record.matches_chosen(prior, prior_levels))
        .map(|record| record.value(level))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sets `level` to `value` and clears every deeper level.
///
/// Re-selecting the value a level already holds leaves the selection
/// untouched, so deeper choices survive.
#[must_use]
pub fn on_level_change(selections: &Selections, level: Level, value: &str) -> Selections {
    if selections.get(level) == value {
        return selections.clone();
    }

    let mut next = selections.clone();
    *next.slot_mut(level) = value.to_string();
    for &deeper in level.deeper() {
        next.slot_mut(deeper).clear();
    }
    next
}

/// Maps a complete selection to the `_id` of the record whose normalized
/// five-tuple equals it.
///
/// If the list holds several identical tuples the first one wins.
#[must_use]
pub fn resolve(locations: &[LocationRecord], selections: &Selections) -> Resolution {
    if !selections.is_complete() {
        return Resolution::Incomplete;
    }

    locations
        .iter()
        .find(|record| record.matches(selections))
        .map_or(Resolution::NoMatch, |record| {
            Resolution::Resolved(record.id.clone())
        })
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
