//! Form state for the shop location selector.
//!
//! Holds the current [`Selections`] and the [`Resolution`] derived from them,
//! recomputed synchronously on every change. Rendering lives elsewhere.

use thiserror::Error;

use crate::level::Level;
use crate::location::LocationRecord;
use crate::resolver::{on_level_change, options_for, resolve, Resolution};
use crate::selection::Selections;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("cannot choose {level} before {missing} is chosen")]
    PriorLevelUnset { level: Level, missing: Level },

    #[error("'{value}' is not an available {level}")]
    UnknownOption { level: Level, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPicker {
    selections: Selections,
    resolution: Resolution,
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::open()
    }
}

impl LocationPicker {
    /// A fresh, empty picker, as when the shop form opens.
    #[must_use]
    pub fn open() -> Self {
        Self {
            selections: Selections::default(),
            resolution: Resolution::Incomplete,
        }
    }

    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    #[must_use]
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Values offered at `level` for the current selection.
    #[must_use]
    pub fn options(&self, locations: &[LocationRecord], level: Level) -> Vec<String> {
        options_for(locations, level, &self.selections)
    }

    /// Chooses `value` at `level`, clearing deeper levels, then re-resolves.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::PriorLevelUnset`] if an earlier level has no
    /// value yet, or [`PickerError::UnknownOption`] if `value` is not among
    /// [`LocationPicker::options`] for `level`. The picker is unchanged on error.
    pub fn select(
        &mut self,
        locations: &[LocationRecord],
        level: Level,
        value: &str,
    ) -> Result<(), PickerError> {
        if let Some(&missing) = level
            .prior()
            .iter()
            .find(|&&prior| !self.selections.is_chosen(prior))
        {
            return Err(PickerError::PriorLevelUnset { level, missing });
        }

        if !self.options(locations, level).iter().any(|o| o == value) {
            return Err(PickerError::UnknownOption {
                level,
                value: value.to_string(),
            });
        }

        self.selections = on_level_change(&self.selections, level, value);
        self.resolution = resolve(locations, &self.selections);
        Ok(())
    }

    /// Un-chooses `level` and every deeper level, then re-resolves.
    pub fn clear(&mut self, locations: &[LocationRecord], level: Level) {
        self.selections = on_level_change(&self.selections, level, "");
        self.resolution = resolve(locations, &self.selections);
    }

    /// Replays `selections` level by level, as if the user had picked each
    /// value in turn. Stops at the first unset level.
    ///
    /// # Errors
    ///
    /// Returns the first [`PickerError`] hit while replaying.
    pub fn prefilled(
        locations: &[LocationRecord],
        selections: &Selections,
    ) -> Result<Self, PickerError> {
        let mut picker = Self::open();
        for level in Level::ALL {
            let value = selections.get(level);
            if value.is_empty() {
                break;
            }
            picker.select(locations, level, value)?;
        }
        Ok(picker)
    }

    /// The resolved `shopLocationId`, if the selection maps to a record.
    #[must_use]
    pub fn shop_location_id(&self) -> Option<&str> {
        self.resolution.id()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.resolution.is_resolved()
    }

    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.resolution.warning()
    }

    /// Clears the form: on close, cancel, or after a successful submission.
    pub fn reset(&mut self) {
        self.selections.reset();
        self.resolution = Resolution::Incomplete;
    }
}
