//! Category-driven choice of singer display name

use crate::model::{Catalog, Singer};

/// Which of a singer's name columns a song category displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVariant {
    /// `Sing`
    Primary,
    /// `OriginalSing`
    Original,
    /// `RomanSing`
    Romanized,
}

/// Category prefix -> name variant. Prefixes not listed use [`NameVariant::Primary`].
const PREFIX_TABLE: &[(&[&str], NameVariant)] = &[
    (
        &["01", "1", "02", "2", "06", "6", "07", "7", "91", "92"],
        NameVariant::Primary,
    ),
    (&["03", "3", "93"], NameVariant::Original),
    (&["04", "4", "05", "5", "08", "8"], NameVariant::Romanized),
];

/// Width song ids are zero-padded to before taking the prefix
const SONG_ID_WIDTH: usize = 8;

impl NameVariant {
    /// Variant for a category prefix
    pub fn for_prefix(prefix: &str) -> Self {
        PREFIX_TABLE
            .iter()
            .find(|(prefixes, _)| prefixes.contains(&prefix))
            .map(|&(_, variant)| variant)
            .unwrap_or(NameVariant::Primary)
    }

    /// Variant for a song, from its category prefix
    pub fn for_song(song_id: &str) -> Self {
        Self::for_prefix(&category_prefix(song_id))
    }

    /// The singer name this variant selects
    pub fn pick(self, singer: &Singer) -> &str {
        match self {
            NameVariant::Primary => &singer.name,
            NameVariant::Original => &singer.original_name,
            NameVariant::Romanized => &singer.romanized_name,
        }
    }
}

/// First two characters of the song id left-padded with zeros to 8 characters
pub fn category_prefix(song_id: &str) -> String {
    zero_pad(song_id, SONG_ID_WIDTH).chars().take(2).collect()
}

/// Left-pad with `0` to `width` characters, keeping a leading sign in front
fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let zeros = "0".repeat(width - len);
    match value.chars().next() {
        Some(sign @ ('+' | '-')) => format!("{}{}{}", sign, zeros, &value[1..]),
        _ => format!("{}{}", zeros, value),
    }
}

/// Display name of a song's singer, `""` when the id is empty or unknown
pub fn select_singer_name<'a>(catalog: &'a Catalog, singer_id: &str, song_id: &str) -> &'a str {
    if singer_id.is_empty() {
        return "";
    }
    match catalog.singer(singer_id) {
        Some(singer) => NameVariant::for_song(song_id).pick(singer),
        None => "",
    }
}
