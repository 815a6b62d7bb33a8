//! Filter command - show plays matching set and range filters

use crate::commands::resolve_dataset;
use crate::config::FilmroomConfig;
use crate::dataset::load_plays;
use crate::filters::{
    filter_plays, parse_filter_expr, parse_range_expr, FilterError, FilterState, RangeCombo,
    RangeFilterState,
};
use crate::{output, FilmroomError};
use log::warn;
use std::collections::BTreeSet;
use std::path::Path;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Arguments of the filter command
#[derive(Debug, Clone, Default)]
pub struct FilterArgs<'a> {
    pub plays: Option<&'a Path>,
    pub filters: &'a [String],
    pub ranges: &'a [String],
    pub zones: &'a [String],
    pub json: bool,
}

/// Build set filter state from `category=v1,v2` expressions
///
/// Repeating a category adds to its selection. Unknown categories are kept and
/// will match nothing.
///
/// # Errors
///
/// Returns `FilterError` if an expression is malformed.
pub fn build_filter_state(exprs: &[String]) -> std::result::Result<FilterState, FilterError> {
    let mut state = FilterState::new();

    for expr in exprs {
        let (category, values) = parse_filter_expr(expr)?;
        if !category.is_known() {
            warn!("Unknown filter category '{category}', no play will match");
        }
        for value in values {
            if !state.is_selected(&category, &value) {
                state.toggle_value(category.clone(), &value);
            }
        }
    }

    Ok(state)
}

/// Build range state from `category=lo..hi` expressions and field zone chips
///
/// Zone chips are applied after the explicit ranges, so selecting any zone
/// replaces an explicit yard line range.
///
/// # Errors
///
/// Returns `FilterError` if an expression is malformed or a zone is unknown.
pub fn build_range_state(
    exprs: &[String],
    zones: &[String],
) -> std::result::Result<RangeFilterState, FilterError> {
    let mut ranges = RangeFilterState::new();

    for expr in exprs {
        let (category, range) = parse_range_expr(expr)?;
        if !category.is_known() {
            warn!("Unknown range category '{category}', no play will match");
        }
        ranges.set(category, range);
    }

    if !zones.is_empty() {
        let combo = RangeCombo::field_zones();
        let mut selected = BTreeSet::new();
        for zone in zones {
            if !selected.contains(zone) {
                combo.toggle(&mut selected, zone, &mut ranges)?;
            }
        }
    }

    Ok(ranges)
}

/// Execute the filter command
///
/// # Errors
/// Returns an error if the dataset cannot be loaded or the filter arguments
/// are malformed.
pub fn execute(config: &FilmroomConfig, args: &FilterArgs<'_>, quiet: bool) -> Result<()> {
    let path = resolve_dataset(args.plays, config.plays_path.as_deref(), "plays")?;
    let plays = load_plays(&path)?;

    let filters = build_filter_state(args.filters)?;
    let ranges = build_range_state(args.ranges, args.zones)?;
    let visible = filter_plays(&plays, &filters, &ranges);

    if args.json {
        println!("{}", serde_json::to_string_pretty(visible.as_ref())?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{} of {} plays match ({})",
            visible.len(),
            plays.len(),
            output::describe_filters(&filters, &ranges)
        );
    }
    for play in visible.iter() {
        println!("{}", output::play_line(play, quiet));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterCategory, NumericRange, RangeCategory};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_repeated_category_accumulates() {
        let state = build_filter_state(&strings(&["down=1", "down=2,1", "hash=L"])).unwrap();
        assert_eq!(state.get(&FilterCategory::Down).map(|v| v.len()), Some(2));
        assert!(state.is_selected(&FilterCategory::Hash, "L"));
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let state = build_filter_state(&strings(&["weather=rain"])).unwrap();
        assert!(state.is_selected(&FilterCategory::Other("weather".into()), "rain"));
    }

    #[test]
    fn test_malformed_expression_is_an_error() {
        assert!(build_filter_state(&strings(&["down"])).is_err());
        assert!(build_range_state(&strings(&["yardLine=a..b"]), &[]).is_err());
    }

    #[test]
    fn test_zones_replace_yard_line_range() {
        let ranges = build_range_state(
            &strings(&["yardLine=0..10", "distance=1..3"]),
            &strings(&["Plus Territory", "Red Zone", "Red Zone"]),
        )
        .unwrap();

        assert_eq!(
            ranges.get(&RangeCategory::YardLine),
            Some(NumericRange::new(51.0, 100.0))
        );
        assert_eq!(
            ranges.get(&RangeCategory::Distance),
            Some(NumericRange::new(1.0, 3.0))
        );
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let err = build_range_state(&[], &strings(&["End Zone"])).unwrap_err();
        assert_eq!(err, FilterError::UnknownChip("End Zone".to_string()));
    }
}
