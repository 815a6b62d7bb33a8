//! Filter data structures and types
//!
//! This module defines the state the filter engine evaluates against:
//! - `FilterCategory`: Set-based filter keys (down, hash, play type, ...)
//! - `RangeCategory`: Numeric range filter keys (yard line, distance, ...)
//! - `FilterState`: Selected values per set category
//! - `RangeFilterState`: Active `[min, max]` range per range category
//! - `NumericRange`: Inclusive numeric interval
//!
//! Keys the engine does not know are kept as `Other(key)` so that states coming
//! from saved views or user input survive a round-trip. They never match.

use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Compare keys ignoring case, `_` and `-` so `yard_line` finds `yardLine`
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Set-based filter category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterCategory {
    Down,
    Quarter,
    Hash,
    OffensivePersonnel,
    DefensivePersonnel,
    Formation,
    PlayType,
    PassResult,
    Touchdown,
    FirstDown,
    Penalty,
    /// Derived bucket over `distance` ("Short: 1-3", "Medium: 4-7", "Long: 8+")
    DistanceType,
    /// A key this engine does not recognise
    Other(String),
}

impl FilterCategory {
    /// Every category the engine knows how to evaluate
    pub const KNOWN: [Self; 12] = [
        Self::Down,
        Self::Quarter,
        Self::Hash,
        Self::OffensivePersonnel,
        Self::DefensivePersonnel,
        Self::Formation,
        Self::PlayType,
        Self::PassResult,
        Self::Touchdown,
        Self::FirstDown,
        Self::Penalty,
        Self::DistanceType,
    ];

    /// Canonical key as used in saved state and on the command line
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Down => "down",
            Self::Quarter => "quarter",
            Self::Hash => "hash",
            Self::OffensivePersonnel => "offensivePersonnel",
            Self::DefensivePersonnel => "defensivePersonnel",
            Self::Formation => "formation",
            Self::PlayType => "playType",
            Self::PassResult => "passResult",
            Self::Touchdown => "touchdown",
            Self::FirstDown => "firstDown",
            Self::Penalty => "penalty",
            Self::DistanceType => "distanceType",
            Self::Other(key) => key,
        }
    }

    /// Look up a category by key, falling back to `Other`
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let wanted = normalize_key(key);
        Self::KNOWN
            .into_iter()
            .find(|category| normalize_key(category.key()) == wanted)
            .unwrap_or_else(|| Self::Other(key.to_string()))
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for FilterCategory {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<FilterCategory> for String {
    fn from(category: FilterCategory) -> Self {
        match category {
            FilterCategory::Other(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Numeric range filter category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RangeCategory {
    YardLine,
    Distance,
    YardsGained,
    /// Approximation derived from yards gained
    YardsAfterContact,
    Other(String),
}

impl RangeCategory {
    pub const KNOWN: [Self; 4] = [
        Self::YardLine,
        Self::Distance,
        Self::YardsGained,
        Self::YardsAfterContact,
    ];

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::YardLine => "yardLine",
            Self::Distance => "distance",
            Self::YardsGained => "yardsGained",
            Self::YardsAfterContact => "yardsAfterContact",
            Self::Other(key) => key,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let wanted = normalize_key(key);
        Self::KNOWN
            .into_iter()
            .find(|category| normalize_key(category.key()) == wanted)
            .unwrap_or_else(|| Self::Other(key.to_string()))
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for RangeCategory {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<RangeCategory> for String {
    fn from(category: RangeCategory) -> Self {
        match category {
            RangeCategory::Other(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive numeric interval `[min, max]`
///
/// A single value `v` is represented as `[v, v]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Create a range, swapping the bounds if given in reverse
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub const fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.is_point() {
            value == self.min
        } else {
            value >= self.min && value <= self.max
        }
    }

    /// Smallest range covering both
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl From<(f64, f64)> for NumericRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<NumericRange> for (f64, f64) {
    fn from(range: NumericRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..{}", self.min, self.max)
        }
    }
}

impl FromStr for NumericRange {
    type Err = FilterError;

    /// Parse `lo..hi` or a single value `v`
    ///
    /// Both bounds must be finite numbers that do not start with a dot, so
    /// `1...3` is rejected rather than read as `1..0.3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |value: &str| {
            let value = value.trim();
            let invalid = || FilterError::InvalidNumber {
                expression: s.to_string(),
                value: value.to_string(),
            };
            if value.is_empty() || value.starts_with('.') {
                return Err(invalid());
            }
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };

        match s.split_once("..") {
            Some((lo, hi)) => Ok(Self::new(parse(lo)?, parse(hi)?)),
            None => Ok(Self::point(parse(s)?)),
        }
    }
}

/// Selected values per set category
///
/// An absent category means "no filter", never "everything selected". An empty
/// set is never stored: every operation that would leave one behind removes the
/// key instead, so equal selections always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FilterCategory, BTreeSet<String>>",
    into = "BTreeMap<FilterCategory, BTreeSet<String>>"
)]
pub struct FilterState {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl FilterState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: BTreeMap::new(),
        }
    }

    /// Replace the selection of a category; an empty selection removes it
    pub fn set<I, S>(&mut self, category: FilterCategory, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.selected.remove(&category);
        } else {
            self.selected.insert(category, values);
        }
    }

    /// Add the value if absent, remove it if present
    ///
    /// Returns `true` if the value is selected afterwards.
    pub fn toggle_value(&mut self, category: FilterCategory, value: &str) -> bool {
        if let Some(values) = self.selected.get_mut(&category) {
            if values.remove(value) {
                if values.is_empty() {
                    self.selected.remove(&category);
                }
                return false;
            }
            values.insert(value.to_string());
            return true;
        }

        self.selected
            .insert(category, BTreeSet::from([value.to_string()]));
        true
    }

    /// Select-all / clear-all affordance for one category
    ///
    /// If anything in the category is selected the whole category is cleared,
    /// otherwise every candidate is selected.
    pub fn toggle_all<I, S>(&mut self, category: FilterCategory, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.selected.contains_key(&category) {
            self.selected.remove(&category);
        } else {
            self.set(category, candidates);
        }
    }

    pub fn remove(&mut self, category: &FilterCategory) -> Option<BTreeSet<String>> {
        self.selected.remove(category)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn get(&self, category: &FilterCategory) -> Option<&BTreeSet<String>> {
        self.selected.get(category)
    }

    #[must_use]
    pub fn is_selected(&self, category: &FilterCategory, value: &str) -> bool {
        self.selected
            .get(category)
            .is_some_and(|values| values.contains(value))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected values over all categories
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterCategory, &BTreeSet<String>)> {
        self.selected.iter()
    }
}

impl From<BTreeMap<FilterCategory, BTreeSet<String>>> for FilterState {
    fn from(mut selected: BTreeMap<FilterCategory, BTreeSet<String>>) -> Self {
        selected.retain(|_, values| !values.is_empty());
        Self { selected }
    }
}

impl From<FilterState> for BTreeMap<FilterCategory, BTreeSet<String>> {
    fn from(state: FilterState) -> Self {
        state.selected
    }
}

/// Active numeric range per range category
///
/// An absent category is at its unrestricted default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeFilterState {
    ranges: BTreeMap<RangeCategory, NumericRange>,
}

impl RangeFilterState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, category: RangeCategory, range: NumericRange) {
        self.ranges.insert(category, range);
    }

    /// Return a category to its default by dropping its range
    pub fn reset(&mut self, category: &RangeCategory) -> Option<NumericRange> {
        self.ranges.remove(category)
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    #[must_use]
    pub fn get(&self, category: &RangeCategory) -> Option<NumericRange> {
        self.ranges.get(category).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RangeCategory, &NumericRange)> {
        self.ranges.iter()
    }
}

/// Parse a set filter expression: `category=value[,value...]`
///
/// # Errors
///
/// Returns `FilterError::InvalidExpression` if there is no `=`, or
/// `FilterError::EmptyValues` if no value follows it.
pub fn parse_filter_expr(expr: &str) -> Result<(FilterCategory, Vec<String>), FilterError> {
    let (key, values) = expr
        .split_once('=')
        .ok_or_else(|| FilterError::InvalidExpression(expr.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(FilterError::InvalidExpression(expr.to_string()));
    }

    let values: Vec<String> = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect();

    if values.is_empty() {
        return Err(FilterError::EmptyValues(expr.to_string()));
    }

    Ok((FilterCategory::from_key(key), values))
}

/// Parse a range filter expression: `category=lo..hi` or `category=value`
///
/// # Errors
///
/// Returns `FilterError::InvalidExpression` if there is no `=`, or
/// `FilterError::InvalidNumber` if a bound is not a number.
pub fn parse_range_expr(expr: &str) -> Result<(RangeCategory, NumericRange), FilterError> {
    let (key, range) = expr
        .split_once('=')
        .ok_or_else(|| FilterError::InvalidExpression(expr.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(FilterError::InvalidExpression(expr.to_string()));
    }

    Ok((RangeCategory::from_key(key), range.parse()?))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
