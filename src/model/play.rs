use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash mark the ball was snapped from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HashMark {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "M")]
    Middle,
    #[serde(rename = "R")]
    Right,
}

impl HashMark {
    /// Short label used by filters and tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Middle => "M",
            Self::Right => "R",
        }
    }
}

impl fmt::Display for HashMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayType {
    Pass,
    Run,
    #[serde(rename = "Special Teams")]
    SpecialTeams,
}

impl PlayType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Run => "Run",
            Self::SpecialTeams => "Special Teams",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a pass play
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PassResult {
    Complete,
    Incomplete,
    Interception,
    Sack,
}

impl PassResult {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
            Self::Interception => "Interception",
            Self::Sack => "Sack",
        }
    }
}

impl fmt::Display for PassResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single play as charted by the video staff
///
/// Plays are produced by external tooling and never modified by the engine.
/// `yard_line` counts from the offense's own goal line (0) to the opponent's (100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub id: String,
    pub quarter: u8,
    pub down: u8,
    pub distance: u8,
    pub yard_line: u8,
    pub hash: HashMark,
    #[serde(default)]
    pub offensive_personnel: String,
    #[serde(default)]
    pub defensive_personnel: String,
    #[serde(default)]
    pub formation: String,
    pub play_type: PlayType,
    #[serde(default)]
    pub pass_result: Option<PassResult>,
    #[serde(default)]
    pub yards_gained: i16,
    #[serde(default)]
    pub is_touchdown: bool,
    #[serde(default)]
    pub is_first_down: bool,
    #[serde(default)]
    pub has_penalty: bool,
}

impl Play {
    /// Create a play with the situation fields set and neutral outcome fields
    #[must_use]
    pub fn new(id: impl Into<String>, down: u8, distance: u8, yard_line: u8, play_type: PlayType) -> Self {
        Self {
            id: id.into(),
            quarter: 1,
            down,
            distance,
            yard_line,
            hash: HashMark::Middle,
            offensive_personnel: String::new(),
            defensive_personnel: String::new(),
            formation: String::new(),
            play_type,
            pass_result: None,
            yards_gained: 0,
            is_touchdown: false,
            is_first_down: false,
            has_penalty: false,
        }
    }

    /// Short human-readable situation, e.g. `3rd & 7 at 45`
    #[must_use]
    pub fn situation(&self) -> String {
        let suffix = match self.down {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        format!("{}{suffix} & {} at {}", self.down, self.distance, self.yard_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_json_uses_camel_case_and_short_labels() {
        let json = r#"{
            "id": "p1",
            "quarter": 2,
            "down": 3,
            "distance": 7,
            "yardLine": 45,
            "hash": "L",
            "offensivePersonnel": "11",
            "playType": "Special Teams",
            "passResult": null,
            "yardsGained": -2,
            "hasPenalty": true
        }"#;

        let play: Play = serde_json::from_str(json).unwrap();
        assert_eq!(play.hash, HashMark::Left);
        assert_eq!(play.play_type, PlayType::SpecialTeams);
        assert_eq!(play.yards_gained, -2);
        assert!(play.has_penalty);
        assert!(!play.is_touchdown);
        assert!(play.formation.is_empty());
    }

    #[test]
    fn test_situation() {
        assert_eq!(Play::new("a", 1, 10, 25, PlayType::Run).situation(), "1st & 10 at 25");
        assert_eq!(Play::new("b", 3, 7, 45, PlayType::Pass).situation(), "3rd & 7 at 45");
        assert_eq!(Play::new("c", 4, 1, 99, PlayType::Run).situation(), "4th & 1 at 99");
    }
}
