/// Number of singer reference columns per song (`SingId1..SingId4`)
pub const SINGER_SLOTS: usize = 4;

/// Number of genre columns per song (`Genre1..Genre4`)
pub const GENRE_SLOTS: usize = 4;

/// Number of composer columns per song (`COMPOSER1..COMPOSER10`)
pub const COMPOSER_SLOTS: usize = 10;

/// One row of the `Song` sheet
///
/// Every field holds the cell's rendered text; a blank cell is an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    /// 8-digit song identifier, kept exactly as rendered from the sheet
    pub id: String,

    /// Display title
    pub title: String,

    /// Phonetic search key (`PYStr1`)
    pub phonetic: String,

    /// Duration as written in the sheet
    pub duration: String,

    /// Category code (`SongType`)
    pub category: String,

    /// Language code in the source vocabulary (`SongLan`)
    pub language: String,

    /// Up to four genre names in the source vocabulary
    pub genres: [String; GENRE_SLOTS],

    /// Normalized singer ids; empty when the slot is unused
    pub singer_ids: [String; SINGER_SLOTS],

    /// Audio file extension (`Format`)
    pub format: String,

    /// Loudness-normalization hint in the source vocabulary (`FFMpeg`)
    pub loudness: String,

    /// Non-empty, trimmed composer names in column order
    pub composers: Vec<String>,

    /// Title in its original script
    pub original_title: String,
}

impl Song {
    /// Song id with surrounding whitespace removed, as used for catalog membership
    pub fn catalog_id(&self) -> &str {
        self.id.trim()
    }
}
