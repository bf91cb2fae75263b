//! `SONGLIST.son` and `songinfo.txt` lines

use super::singer_name::select_singer_name;
use super::DELIMITER;
use crate::model::{Catalog, Song};
use crate::reference::ReferenceTables;

/// Number of fields in a `SONGLIST.son` line
pub const SONGLIST_FIELDS: usize = 33;

/// Number of fields in a `songinfo.txt` line
pub const SONGINFO_FIELDS: usize = 6;

/// Placeholder for an empty singer slot or an unused platform field
const NONE_ID: &str = "-1";

/// Resolved singer names of a song, in slot order, joined with `", "`
pub fn singer_display_names(song: &Song, catalog: &Catalog) -> String {
    song.singer_ids
        .iter()
        .map(|id| select_singer_name(catalog, id, &song.id))
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `SONGLIST.son` line
///
/// Field order and the literal placeholders are fixed by the jukebox platform.
pub fn songlist_line(song: &Song, catalog: &Catalog, refs: &ReferenceTables) -> String {
    let volume = refs.resolve_volume(&song.loudness);
    let language = refs.resolve_language(&song.language);
    let singers = singer_display_names(song, catalog);

    let mut fields: Vec<String> = Vec::with_capacity(SONGLIST_FIELDS);
    fields.push("MUSIC".to_string());
    fields.push(volume);
    fields.push(song.id.clone());
    fields.push(format!("{}.{}", song.id, song.format));
    fields.push(song.title.clone());
    fields.push(song.phonetic.clone());
    fields.push(song.duration.clone());
    fields.push(song.category.clone());
    fields.push(song.language.clone());
    fields.push(singers);
    fields.push("1".to_string());
    fields.push("2".to_string());
    fields.push(language);
    fields.extend(std::iter::repeat(NONE_ID.to_string()).take(3));
    fields.extend(song.singer_ids.iter().map(|id| {
        if id.is_empty() {
            NONE_ID.to_string()
        } else {
            id.clone()
        }
    }));
    fields.extend(song.genres.iter().map(|g| refs.resolve_genre(g).to_string()));
    fields.extend(
        ["C", "291308162", "GOOD", "GOOD", "GOOD", "GOOD"]
            .iter()
            .map(|s| s.to_string()),
    );
    fields.push(song.id.clone());
    fields.push("1".to_string());
    fields.push("1".to_string());

    debug_assert_eq!(fields.len(), SONGLIST_FIELDS);
    fields.join(DELIMITER)
}

/// One `songinfo.txt` line: id, original title, two blanks, composers, phonetic key
pub fn songinfo_line(song: &Song) -> String {
    let composers = song.composers.join(", ");
    [
        song.id.as_str(),
        song.original_title.as_str(),
        "",
        "",
        composers.as_str(),
        song.phonetic.as_str(),
    ]
    .join(DELIMITER)
}
