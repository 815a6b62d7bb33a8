//! Predicate evaluation of plays against filter state

use super::types::{FilterCategory, FilterState, RangeCategory, RangeFilterState};
use crate::model::Play;
use log::{debug, trace};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

/// Labelled bands of the derived `distanceType` category, `(label, min, max)`
pub const DISTANCE_BANDS: [(&str, u8, u8); 3] = [
    ("Short: 1-3", 1, 3),
    ("Medium: 4-7", 4, 7),
    ("Long: 8+", 8, u8::MAX),
];

/// Share of yards gained credited as yards after contact
const YAC_SHARE: f64 = 0.4;

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Band label for a distance to go, `None` for 0
#[must_use]
pub fn distance_bucket(distance: u8) -> Option<&'static str> {
    DISTANCE_BANDS
        .iter()
        .find(|(_, min, max)| (*min..=*max).contains(&distance))
        .map(|(label, _, _)| *label)
}

/// Canonical string value of a play for a set category
///
/// Numbers become their decimal digits and flags become `"Yes"`/`"No"`.
/// `distanceType` and unknown categories yield an empty string; the former is
/// matched through [`distance_bucket`] instead.
#[must_use]
pub fn value_for_category(play: &Play, category: &FilterCategory) -> String {
    match category {
        FilterCategory::Down => play.down.to_string(),
        FilterCategory::Quarter => play.quarter.to_string(),
        FilterCategory::Hash => play.hash.as_str().to_string(),
        FilterCategory::OffensivePersonnel => play.offensive_personnel.clone(),
        FilterCategory::DefensivePersonnel => play.defensive_personnel.clone(),
        FilterCategory::Formation => play.formation.clone(),
        FilterCategory::PlayType => play.play_type.as_str().to_string(),
        FilterCategory::PassResult => play
            .pass_result
            .map(|result| result.as_str().to_string())
            .unwrap_or_default(),
        FilterCategory::Touchdown => yes_no(play.is_touchdown).to_string(),
        FilterCategory::FirstDown => yes_no(play.is_first_down).to_string(),
        FilterCategory::Penalty => yes_no(play.has_penalty).to_string(),
        FilterCategory::DistanceType | FilterCategory::Other(_) => String::new(),
    }
}

/// Numeric value of a play for a range category
///
/// Returns `None` for categories the engine does not know, which makes any
/// active range on them unsatisfiable.
#[must_use]
pub fn numeric_value_for_range(play: &Play, category: &RangeCategory) -> Option<f64> {
    match category {
        RangeCategory::YardLine => Some(f64::from(play.yard_line)),
        RangeCategory::Distance => Some(f64::from(play.distance)),
        RangeCategory::YardsGained => Some(f64::from(play.yards_gained)),
        RangeCategory::YardsAfterContact => {
            Some((f64::from(play.yards_gained.max(0)) * YAC_SHARE).round())
        }
        RangeCategory::Other(_) => None,
    }
}

fn matches_category(play: &Play, category: &FilterCategory, values: &BTreeSet<String>) -> bool {
    match category {
        FilterCategory::DistanceType => {
            distance_bucket(play.distance).is_some_and(|label| values.contains(label))
        }
        FilterCategory::Other(_) => false,
        _ => values.contains(&value_for_category(play, category)),
    }
}

/// Check a play against every active set category
#[must_use]
pub fn matches_set_filters(play: &Play, filters: &FilterState) -> bool {
    filters
        .iter()
        .all(|(category, values)| matches_category(play, category, values))
}

/// Check a play against every active range
#[must_use]
pub fn matches_range_filters(play: &Play, ranges: &RangeFilterState) -> bool {
    ranges.iter().all(|(category, range)| {
        numeric_value_for_range(play, category).is_some_and(|value| range.contains(value))
    })
}

/// Whether any set or range filter is active
#[must_use]
pub fn has_active_filters(filters: &FilterState, ranges: &RangeFilterState) -> bool {
    !filters.is_empty() || !ranges.is_empty()
}

/// Plays visible under the given filters, in input order
///
/// With no active filter the input slice itself is returned borrowed, so callers
/// can compare addresses to skip downstream work.
#[must_use]
pub fn filter_plays<'a>(
    plays: &'a [Play],
    filters: &FilterState,
    ranges: &RangeFilterState,
) -> Cow<'a, [Play]> {
    if !has_active_filters(filters, ranges) {
        return Cow::Borrowed(plays);
    }

    let visible: Vec<Play> = plays
        .iter()
        .filter(|play| matches_set_filters(play, filters) && matches_range_filters(play, ranges))
        .cloned()
        .collect();

    debug!(
        "Filtered {} plays to {} ({} set values, {} ranges)",
        plays.len(),
        visible.len(),
        filters.active_count(),
        ranges.len()
    );

    Cow::Owned(visible)
}

/// Distinct values of a category with their counts, in first-seen order
///
/// Plays without a value for the category (no pass result, distance 0 for
/// `distanceType`) are not counted.
#[must_use]
pub fn facet_counts(plays: &[Play], category: &FilterCategory) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for play in plays {
        let value = match category {
            FilterCategory::DistanceType => distance_bucket(play.distance)
                .map(ToString::to_string)
                .unwrap_or_default(),
            _ => value_for_category(play, category),
        };

        if value.is_empty() {
            continue;
        }

        if let Some(&index) = positions.get(&value) {
            counts[index].1 += 1;
        } else {
            trace!("New facet value '{value}' for {category}");
            positions.insert(value.clone(), counts.len());
            counts.push((value, 1));
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::types::NumericRange;
    use crate::model::{HashMark, PassResult, PlayType};
    use crate::testing::sample_plays;

    fn ids(plays: &[Play]) -> Vec<&str> {
        plays.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_value_for_category() {
        let mut play = Play::new("p", 3, 7, 45, PlayType::Pass);
        play.hash = HashMark::Left;
        play.pass_result = Some(PassResult::Complete);
        play.is_touchdown = true;
        play.offensive_personnel = "11".to_string();

        assert_eq!(value_for_category(&play, &FilterCategory::Down), "3");
        assert_eq!(value_for_category(&play, &FilterCategory::Hash), "L");
        assert_eq!(value_for_category(&play, &FilterCategory::PlayType), "Pass");
        assert_eq!(value_for_category(&play, &FilterCategory::PassResult), "Complete");
        assert_eq!(value_for_category(&play, &FilterCategory::Touchdown), "Yes");
        assert_eq!(value_for_category(&play, &FilterCategory::Penalty), "No");
        assert_eq!(value_for_category(&play, &FilterCategory::OffensivePersonnel), "11");
        assert_eq!(
            value_for_category(&play, &FilterCategory::Other("weather".into())),
            ""
        );
    }

    #[test]
    fn test_numeric_value_for_range() {
        let mut play = Play::new("p", 1, 10, 35, PlayType::Run);
        play.yards_gained = 10;

        assert_eq!(numeric_value_for_range(&play, &RangeCategory::YardLine), Some(35.0));
        assert_eq!(numeric_value_for_range(&play, &RangeCategory::Distance), Some(10.0));
        assert_eq!(numeric_value_for_range(&play, &RangeCategory::YardsGained), Some(10.0));
        assert_eq!(
            numeric_value_for_range(&play, &RangeCategory::YardsAfterContact),
            Some(4.0)
        );
        assert_eq!(
            numeric_value_for_range(&play, &RangeCategory::Other("speed".into())),
            None
        );

        play.yards_gained = -6;
        assert_eq!(
            numeric_value_for_range(&play, &RangeCategory::YardsAfterContact),
            Some(0.0)
        );
    }

    #[test]
    fn test_distance_bucket() {
        assert_eq!(distance_bucket(0), None);
        assert_eq!(distance_bucket(1), Some("Short: 1-3"));
        assert_eq!(distance_bucket(3), Some("Short: 1-3"));
        assert_eq!(distance_bucket(4), Some("Medium: 4-7"));
        assert_eq!(distance_bucket(7), Some("Medium: 4-7"));
        assert_eq!(distance_bucket(8), Some("Long: 8+"));
        assert_eq!(distance_bucket(25), Some("Long: 8+"));
    }

    #[test]
    fn test_empty_state_returns_same_slice() {
        let plays = sample_plays();
        let result = filter_plays(&plays, &FilterState::new(), &RangeFilterState::new());

        assert!(matches!(result, Cow::Borrowed(_)));
        assert!(std::ptr::eq(result.as_ref(), plays.as_slice()));
    }

    #[test]
    fn test_or_within_category() {
        let plays = sample_plays();
        let mut filters = FilterState::new();
        filters.set(FilterCategory::Down, ["1", "3"]);

        let result = filter_plays(&plays, &filters, &RangeFilterState::new());
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.down == 1 || p.down == 3));
        assert_eq!(
            result.len(),
            plays.iter().filter(|p| p.down == 1 || p.down == 3).count()
        );
    }

    #[test]
    fn test_and_across_categories() {
        let plays = sample_plays();
        let mut filters = FilterState::new();
        filters.set(FilterCategory::Down, ["1"]);
        filters.set(FilterCategory::Hash, ["L"]);

        let result = filter_plays(&plays, &filters, &RangeFilterState::new());
        let expected: Vec<&str> = plays
            .iter()
            .filter(|p| p.down == 1 && p.hash == HashMark::Left)
            .map(|p| p.id.as_str())
            .collect();

        assert!(!expected.is_empty());
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let plays: Vec<Play> = [19, 20, 30, 40, 41]
            .iter()
            .enumerate()
            .map(|(i, yard_line)| Play::new(format!("p{i}"), 1, 10, *yard_line, PlayType::Run))
            .collect();

        let mut ranges = RangeFilterState::new();
        ranges.set(RangeCategory::YardLine, NumericRange::new(20.0, 40.0));

        let result = filter_plays(&plays, &FilterState::new(), &ranges);
        let yard_lines: Vec<u8> = result.iter().map(|p| p.yard_line).collect();
        assert_eq!(yard_lines, vec![20, 30, 40]);
    }

    #[test]
    fn test_single_point_range() {
        let plays: Vec<Play> = (3..=7)
            .map(|distance| Play::new(format!("d{distance}"), 2, distance, 50, PlayType::Pass))
            .collect();

        let mut ranges = RangeFilterState::new();
        ranges.set(RangeCategory::Distance, NumericRange::point(5.0));

        let result = filter_plays(&plays, &FilterState::new(), &ranges);
        assert_eq!(ids(&result), vec!["d5"]);
    }

    #[test]
    fn test_distance_type_uses_buckets() {
        let plays: Vec<Play> = [1, 3, 4, 8, 12]
            .iter()
            .map(|d| Play::new(format!("d{d}"), 1, *d, 50, PlayType::Run))
            .collect();

        let mut filters = FilterState::new();
        filters.set(FilterCategory::DistanceType, ["Short: 1-3", "Long: 8+"]);

        let result = filter_plays(&plays, &filters, &RangeFilterState::new());
        assert_eq!(ids(&result), vec!["d1", "d3", "d8", "d12"]);
    }

    #[test]
    fn test_unknown_categories_fail_closed() {
        let plays = sample_plays();

        let mut filters = FilterState::new();
        filters.set(FilterCategory::Other("weather".into()), [""]);
        assert!(filter_plays(&plays, &filters, &RangeFilterState::new()).is_empty());

        let mut ranges = RangeFilterState::new();
        ranges.set(
            RangeCategory::Other("speed".into()),
            NumericRange::new(f64::MIN, f64::MAX),
        );
        assert!(filter_plays(&plays, &FilterState::new(), &ranges).is_empty());
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let plays = sample_plays();
        let mut filters = FilterState::new();
        filters.set(FilterCategory::PlayType, ["Pass"]);
        let mut ranges = RangeFilterState::new();
        ranges.set(RangeCategory::YardLine, NumericRange::new(20.0, 80.0));

        let once = filter_plays(&plays, &filters, &ranges).into_owned();
        assert!(once.iter().all(|p| plays.contains(p)));

        let twice = filter_plays(&once, &filters, &ranges);
        assert_eq!(twice.as_ref(), once.as_slice());
    }

    #[test]
    fn test_facet_counts() {
        let plays = sample_plays();

        let downs = facet_counts(&plays, &FilterCategory::Down);
        let total: usize = downs.iter().map(|(_, count)| count).sum();
        assert_eq!(total, plays.len());
        assert_eq!(downs[0].0, plays[0].down.to_string());

        let results = facet_counts(&plays, &FilterCategory::PassResult);
        let passes = plays.iter().filter(|p| p.pass_result.is_some()).count();
        assert_eq!(results.iter().map(|(_, c)| c).sum::<usize>(), passes);

        assert!(facet_counts(&plays, &FilterCategory::Other("x".into())).is_empty());
    }
}
