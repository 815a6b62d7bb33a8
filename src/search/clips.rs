//! Free-text clip search
//!
//! A lightweight relevance heuristic: every query keyword found in a clip adds a
//! fixed weight depending on where it was found. The weights carry no meaning
//! beyond "title beats tag beats description".

use crate::model::Clip;
use log::debug;
use serde::Serialize;

const TITLE_WEIGHT: u32 = 10;
const TAG_WEIGHT: u32 = 5;
const DESCRIPTION_WEIGHT: u32 = 2;

/// A clip with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipHit<'a> {
    pub clip: &'a Clip,
    pub score: u32,
}

fn keywords(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Relevance of a clip for already lowercased keywords, 0 if nothing matches
#[must_use]
pub fn score_clip(clip: &Clip, keywords: &[String]) -> u32 {
    let title = clip.title.to_lowercase();
    let description = clip.description.to_lowercase();
    let tags: Vec<String> = clip.tags.iter().map(|t| t.to_lowercase()).collect();

    keywords
        .iter()
        .map(|keyword| {
            let mut score = 0;
            if title.contains(keyword.as_str()) {
                score += TITLE_WEIGHT;
            }
            if tags.iter().any(|tag| tag == keyword) {
                score += TAG_WEIGHT;
            }
            if description.contains(keyword.as_str()) {
                score += DESCRIPTION_WEIGHT;
            }
            score
        })
        .sum()
}

/// Clips matching any keyword of `query`, best first, at most `limit`
///
/// Equal scores keep their input order.
#[must_use]
pub fn search_clips<'a>(clips: &'a [Clip], query: &str, limit: usize) -> Vec<ClipHit<'a>> {
    let keywords = keywords(query);
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<ClipHit<'a>> = clips
        .iter()
        .map(|clip| ClipHit {
            clip,
            score: score_clip(clip, &keywords),
        })
        .filter(|hit| hit.score > 0)
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);

    debug!("Clip search for '{query}' returned {} hits", hits.len());
    hits
}
