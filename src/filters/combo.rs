//! Chip controls that drive a union range
//!
//! A combo control offers labelled chips, each covering a numeric range of one
//! range category. The active range is always the union of the selected chips'
//! ranges and is recomputed from the selection on every toggle; it is never
//! stored on its own.

use super::engine::DISTANCE_BANDS;
use super::error::FilterError;
use super::types::{NumericRange, RangeCategory, RangeFilterState};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A toggleable chip covering a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeChip {
    pub label: String,
    pub range: NumericRange,
}

impl RangeChip {
    #[must_use]
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            range: NumericRange::new(min, max),
        }
    }
}

/// Chip set bound to one range category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCombo {
    pub category: RangeCategory,
    pub chips: Vec<RangeChip>,
}

impl RangeCombo {
    #[must_use]
    pub const fn new(category: RangeCategory, chips: Vec<RangeChip>) -> Self {
        Self { category, chips }
    }

    /// Field position zones over the yard line
    #[must_use]
    pub fn field_zones() -> Self {
        Self::new(
            RangeCategory::YardLine,
            vec![
                RangeChip::new("Own Territory", 0.0, 49.0),
                RangeChip::new("Midfield", 40.0, 60.0),
                RangeChip::new("Plus Territory", 51.0, 79.0),
                RangeChip::new("Red Zone", 80.0, 100.0),
            ],
        )
    }

    /// Short / medium / long bands over the distance to go
    #[must_use]
    pub fn distance_bands() -> Self {
        let chips = DISTANCE_BANDS
            .iter()
            .map(|(label, min, max)| {
                let max = if *max == u8::MAX { 100 } else { *max };
                RangeChip::new(*label, f64::from(*min), f64::from(max))
            })
            .collect();

        Self::new(RangeCategory::Distance, chips)
    }

    #[must_use]
    pub fn chip(&self, label: &str) -> Option<&RangeChip> {
        self.chips.iter().find(|chip| chip.label == label)
    }

    /// Union of the selected chips' ranges, `None` when no known chip is selected
    #[must_use]
    pub fn derive_range(&self, selected: &BTreeSet<String>) -> Option<NumericRange> {
        self.chips
            .iter()
            .filter(|chip| selected.contains(&chip.label))
            .map(|chip| chip.range)
            .reduce(NumericRange::union)
    }

    /// Write the range derived from `selected` into `ranges`
    ///
    /// An empty selection resets the category to its default.
    pub fn sync(&self, selected: &BTreeSet<String>, ranges: &mut RangeFilterState) {
        match self.derive_range(selected) {
            Some(range) => {
                debug!("{} combo range is now {range}", self.category);
                ranges.set(self.category.clone(), range);
            }
            None => {
                debug!("{} combo cleared", self.category);
                ranges.reset(&self.category);
            }
        }
    }

    /// Flip a chip in the selection and resynchronise the range
    ///
    /// Returns `true` if the chip is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownChip` if the combo has no chip with that label;
    /// neither the selection nor the ranges are touched in that case.
    pub fn toggle(
        &self,
        selected: &mut BTreeSet<String>,
        label: &str,
        ranges: &mut RangeFilterState,
    ) -> Result<bool, FilterError> {
        if self.chip(label).is_none() {
            return Err(FilterError::UnknownChip(label.to_string()));
        }

        let now_selected = if selected.remove(label) {
            false
        } else {
            selected.insert(label.to_string());
            true
        };

        self.sync(selected, ranges);
        Ok(now_selected)
    }
}
