//! Play filter engine
//!
//! This module decides which plays are visible under the current filter
//! selection. Two families of filters are combined:
//!
//! - **Set filters** (`FilterState`): each active category holds the selected
//!   values; a play matches when its value is any one of them (OR)
//! - **Range filters** (`RangeFilterState`): each active category holds an
//!   inclusive `[min, max]` interval
//!
//! Every active category must match (AND), across both families.
//!
//! # Examples
//!
//! ```
//! use filmroom::filters::{FilterCategory, FilterState, RangeFilterState, filter_plays};
//! use filmroom::model::{Play, PlayType};
//!
//! let plays = vec![
//!     Play::new("p1", 1, 10, 25, PlayType::Run),
//!     Play::new("p2", 3, 2, 48, PlayType::Pass),
//! ];
//!
//! let mut filters = FilterState::new();
//! filters.toggle_value(FilterCategory::Down, "3");
//!
//! let visible = filter_plays(&plays, &filters, &RangeFilterState::new());
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "p2");
//! ```

pub mod combo;
pub mod engine;
pub mod error;
pub mod types;

pub use combo::{RangeChip, RangeCombo};
pub use engine::{
    distance_bucket, facet_counts, filter_plays, has_active_filters, matches_range_filters,
    matches_set_filters, numeric_value_for_range, value_for_category, DISTANCE_BANDS,
};
pub use error::FilterError;
pub use types::{
    parse_filter_expr, parse_range_expr, FilterCategory, FilterState, NumericRange, RangeCategory,
    RangeFilterState,
};
