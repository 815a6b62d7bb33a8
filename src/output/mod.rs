//! Output formatting for CLI display
//!
//! This module turns plays, search matches and breadcrumbs into the lines the
//! command line prints. In quiet mode only ids are printed so results can be
//! piped into other tools.

use crate::filters::{FilterState, RangeFilterState};
use crate::model::{Crumb, Folder, Play};
use crate::search::{ClipHit, MatchKind, TreeMatch};
use colored::Colorize;

/// Format a play as a one-line summary
#[must_use]
pub fn play_line(play: &Play, quiet: bool) -> String {
    if quiet {
        return play.id.clone();
    }

    let result = play
        .pass_result
        .map(|r| format!(" {r}"))
        .unwrap_or_default();

    let mut line = format!(
        "  {} Q{} {:<16} {} {:<13}{} {:+} yds",
        play.id.bold(),
        play.quarter,
        play.situation(),
        play.hash,
        play.play_type.to_string(),
        result,
        play.yards_gained
    );

    if play.is_touchdown {
        line.push_str(&format!(" {}", "TD".green().bold()));
    } else if play.is_first_down {
        line.push_str(&format!(" {}", "1st".green()));
    }
    if play.has_penalty {
        line.push_str(&format!(" {}", "FLAG".yellow()));
    }

    line
}

/// Format a facet value with its count
#[must_use]
pub fn facet_line(value: &str, count: usize, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("  {value} ({count} play(s))")
    }
}

/// Format a tree search match with its folder path
#[must_use]
pub fn match_line(found: &TreeMatch, separator: &str, quiet: bool) -> String {
    if quiet {
        return found.id.clone();
    }

    let name = match found.kind {
        MatchKind::Folder => format!("{}/", found.name).blue().bold().to_string(),
        MatchKind::Item => found.name.clone(),
    };

    if found.path.is_empty() {
        format!("  {name}")
    } else {
        format!("  {name} {}", format!("in {}", found.display_path(separator)).dimmed())
    }
}

/// Format a breadcrumb trail, root first
#[must_use]
pub fn breadcrumb_line(trail: &[Crumb], separator: &str) -> String {
    std::iter::once("Library".to_string())
        .chain(trail.iter().map(|crumb| crumb.name.clone()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Size of a folder, counting the items of every subfolder
#[must_use]
pub fn folder_summary(folder: &Folder) -> String {
    match folder.item_count() {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}

/// Format a clip hit with its score
#[must_use]
pub fn clip_line(hit: &ClipHit<'_>, quiet: bool) -> String {
    if quiet {
        return hit.clip.id.clone();
    }

    let tags = if hit.clip.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", hit.clip.tags.join(", "))
    };

    format!("  {} {}{} (score {})", hit.clip.id.bold(), hit.clip.title, tags, hit.score)
}

/// Describe the active filters, e.g. `down=1,3 yardLine=20..40`
#[must_use]
pub fn describe_filters(filters: &FilterState, ranges: &RangeFilterState) -> String {
    let sets = filters.iter().map(|(category, values)| {
        format!(
            "{category}={}",
            values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
        )
    });
    let numeric = ranges
        .iter()
        .map(|(category, range)| format!("{category}={range}"));

    let parts: Vec<String> = sets.chain(numeric).collect();
    if parts.is_empty() {
        "no filters".to_string()
    } else {
        parts.join(" ")
    }
}
