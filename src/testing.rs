//! Testing utilities for filmroom
//!
//! Small fixed datasets shared by unit tests: a dozen charted plays, a
//! two-season library tree and a handful of clips.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::{Clip, Folder, FolderItem, HashMark, ItemKind, PassResult, Play, PlayType};

#[allow(clippy::too_many_arguments)]
fn play(
    id: &str,
    quarter: u8,
    down: u8,
    distance: u8,
    yard_line: u8,
    hash: HashMark,
    personnel: &str,
    play_type: PlayType,
    pass_result: Option<PassResult>,
    yards_gained: i16,
) -> Play {
    Play {
        id: id.to_string(),
        quarter,
        down,
        distance,
        yard_line,
        hash,
        offensive_personnel: personnel.to_string(),
        defensive_personnel: if personnel == "11" { "Nickel" } else { "Base" }.to_string(),
        formation: if play_type == PlayType::Pass { "Shotgun" } else { "Under Center" }.to_string(),
        play_type,
        pass_result,
        yards_gained,
        is_touchdown: i16::from(yard_line) + yards_gained >= 100,
        is_first_down: yards_gained >= i16::from(distance),
        has_penalty: false,
    }
}

/// Twelve plays covering every down, hash and play type
#[must_use]
pub fn sample_plays() -> Vec<Play> {
    use HashMark::{Left, Middle, Right};
    use PassResult::{Complete, Incomplete, Interception, Sack};
    use PlayType::{Pass, Run, SpecialTeams};

    let mut plays = vec![
        play("p01", 1, 1, 10, 25, Left, "11", Run, None, 4),
        play("p02", 1, 2, 6, 29, Middle, "11", Pass, Some(Complete), 9),
        play("p03", 1, 1, 10, 38, Right, "12", Run, None, -1),
        play("p04", 1, 2, 11, 37, Left, "11", Pass, Some(Incomplete), 0),
        play("p05", 2, 3, 11, 37, Left, "11", Pass, Some(Sack), -7),
        play("p06", 2, 4, 18, 30, Middle, "00", SpecialTeams, None, 0),
        play("p07", 2, 1, 10, 55, Left, "21", Run, None, 12),
        play("p08", 3, 1, 10, 67, Right, "11", Pass, Some(Complete), 15),
        play("p09", 3, 2, 3, 82, Middle, "12", Run, None, 2),
        play("p10", 3, 3, 1, 84, Left, "22", Run, None, 1),
        play("p11", 4, 1, 10, 85, Right, "11", Pass, Some(Complete), 15),
        play("p12", 4, 3, 8, 48, Middle, "11", Pass, Some(Interception), 0),
    ];

    plays[3].has_penalty = true;
    plays
}

/// Library with nested week folders
#[must_use]
pub fn sample_library() -> Vec<Folder> {
    let mut opener = FolderItem::new("clip-opener", "Opening Drive");
    opener.duration_secs = Some(240);

    let mut cutups = FolderItem::new("s24-w1-off-rz", "Red Zone Cut-ups");
    cutups.kind = ItemKind::Playlist;

    vec![
        Folder::new("s24", "Season 2024")
            .with_folder(
                Folder::new("s24-w1", "Week 1")
                    .with_folder(
                        Folder::new("s24-w1-off", "Offense")
                            .with_item(opener)
                            .with_item(cutups),
                    )
                    .with_folder(
                        Folder::new("s24-w1-def", "Defense")
                            .with_item(FolderItem::new("s24-w1-def-3d", "Third Down Pressure")),
                    ),
            )
            .with_item(FolderItem::new("s24-recap", "Week 1 Highlights")),
        Folder::new("s23", "Season 2023")
            .with_item(FolderItem::new("s23-rz", "Red Zone Review"))
            .with_item(FolderItem::new("s23-bowl", "Bowl Game")),
    ]
}

/// Clips with overlapping keywords
#[must_use]
pub fn sample_clips() -> Vec<Clip> {
    vec![
        Clip::new("c1", "Inside Zone Left")
            .with_tags(&["run", "zone"])
            .with_description("Double team at the point of attack"),
        Clip::new("c2", "Red Zone Fade")
            .with_tags(&["pass", "redzone"])
            .with_description("Back-shoulder fade vs press"),
        Clip::new("c3", "Cover 2 Beater")
            .with_tags(&["pass"])
            .with_description("Hole shot between the corner and safety zone"),
        Clip::new("c4", "Outside Zone Right")
            .with_tags(&["run", "zone"]),
        Clip::new("c5", "Punt Return Wall")
            .with_tags(&["special teams"]),
    ]
}
