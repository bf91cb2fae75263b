//! `Song`, `Sing` and `Delete Song` sheet parsing

use super::reader::Workbook;
use super::sheet::{Record, Table};
use crate::model::{Catalog, Singer, Song, COMPOSER_SLOTS};
use crate::normalize::normalize_id;
use anyhow::Result;

pub const SONG_SHEET: &str = "Song";
pub const SINGER_SHEET: &str = "Sing";
pub const DELETE_SHEET: &str = "Delete Song";

/// Columns the `Song` sheet must carry; the rest read as blank when absent
const SONG_REQUIRED: &[&str] = &[
    "SongId", "Format", "Song", "PYStr1", "SongLen", "SongType", "SongLan", "SingId1", "SingId2",
    "SingId3", "SingId4",
];

const SINGER_REQUIRED: &[&str] = &["SingId", "Sing", "PYStr"];

const DELETE_ID_COLUMN: &str = "SongId";

/// Read the song and singer sheets into a catalog
///
/// `row_limit` caps the number of songs kept; singers are never capped.
pub fn read_catalog(workbook: &mut Workbook, row_limit: Option<usize>) -> Result<Catalog> {
    let songs = Table::from_sheet(workbook.sheet(SONG_SHEET)?);
    let singers = Table::from_sheet(workbook.sheet(SINGER_SHEET)?);
    if songs.is_empty() {
        log::warn!("'{}' sheet has no song rows", SONG_SHEET);
    }

    let mut catalog = catalog_from_tables(&songs, &singers)?;
    if let Some(limit) = row_limit {
        log::info!("Limiting export to the first {} song rows", limit);
        catalog.truncate_songs(limit);
    }

    log::info!(
        "Catalog loaded: {} songs, {} singers",
        catalog.song_count(),
        catalog.singer_count()
    );

    Ok(catalog)
}

/// Build a catalog from already-loaded `Song` and `Sing` tables
pub fn catalog_from_tables(songs: &Table, singers: &Table) -> Result<Catalog> {
    songs.require_columns(SONG_REQUIRED)?;
    singers.require_columns(SINGER_REQUIRED)?;

    let songs = songs.records().map(|r| song_from_record(&r)).collect();
    let singers = singers.records().map(|r| singer_from_record(&r)).collect();

    Ok(Catalog::new(songs, singers))
}

/// Read the raw candidate ids of the `Delete Song` sheet
pub fn read_delete_entries(workbook: &mut Workbook) -> Result<Vec<String>> {
    let table = Table::from_sheet(workbook.sheet(DELETE_SHEET)?);
    table.require_columns(&[DELETE_ID_COLUMN])?;

    Ok(table.records().map(|r| r.text(DELETE_ID_COLUMN)).collect())
}

fn song_from_record(record: &Record<'_>) -> Song {
    let genres = std::array::from_fn(|i| record.text(&format!("Genre{}", i + 1)));
    let singer_ids =
        std::array::from_fn(|i| normalize_id(record.get(&format!("SingId{}", i + 1))));

    let composers = (1..=COMPOSER_SLOTS)
        .map(|i| record.text(&format!("COMPOSER{}", i)).trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    Song {
        id: record.text("SongId"),
        title: record.text("Song"),
        phonetic: record.text("PYStr1"),
        duration: record.text("SongLen"),
        category: record.text("SongType"),
        language: record.text("SongLan"),
        genres,
        singer_ids,
        format: record.text("Format"),
        loudness: record.text("FFMpeg"),
        composers,
        original_title: record.text("OriginalSong"),
    }
}

fn singer_from_record(record: &Record<'_>) -> Singer {
    Singer {
        id: normalize_id(record.get("SingId")),
        name: record.text("Sing"),
        original_name: record.text("OriginalSing"),
        romanized_name: record.text("RomanSing"),
        phonetic: record.text("PYStr"),
        country: record.text("SingCountry"),
        sex: record.text("SingSex"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Cell;

    fn song_table() -> Table {
        Table::from_rows(
            SONG_SHEET,
            &[
                "SongId", "Song", "PYStr1", "SongLen", "SongType", "SongLan", "SingId1", "SingId2",
                "SingId3", "SingId4", "Format", "Genre1", "COMPOSER1", "COMPOSER2", "COMPOSER3",
            ],
            vec![vec![
                Cell::from("01000001"),
                Cell::from("Lagu"),
                Cell::from("LG"),
                Cell::Number(215.0),
                Cell::from("01"),
                Cell::from("ind"),
                Cell::Number(12.0),
                Cell::from("13.0"),
                Cell::Empty,
                Cell::from("x"),
                Cell::from("mp4"),
                Cell::from("Pop"),
                Cell::from(" Budi "),
                Cell::from("  "),
                Cell::from("Sari"),
            ]],
        )
    }

    fn singer_table() -> Table {
        Table::from_rows(
            SINGER_SHEET,
            &["SingId", "Sing", "PYStr", "SingCountry"],
            vec![vec![
                Cell::Number(12.0),
                Cell::from("Ana"),
                Cell::from("AN"),
                Cell::from("ID"),
            ]],
        )
    }

    #[test]
    fn test_song_fields_and_normalized_singer_slots() {
        let catalog = catalog_from_tables(&song_table(), &singer_table()).unwrap();
        let song = &catalog.songs()[0];

        assert_eq!(song.id, "01000001");
        assert_eq!(song.duration, "215");
        assert_eq!(song.singer_ids, ["12", "13", "", ""]);
        assert_eq!(song.genres[0], "Pop");
        assert_eq!(song.genres[3], "");
        assert_eq!(song.composers, vec!["Budi", "Sari"]);
        assert_eq!(song.loudness, "");
        assert_eq!(song.original_title, "");
    }

    #[test]
    fn test_singer_fields() {
        let catalog = catalog_from_tables(&song_table(), &singer_table()).unwrap();
        let singer = catalog.singer("12").unwrap();

        assert_eq!(singer.name, "Ana");
        assert_eq!(singer.country, "ID");
        assert_eq!(singer.sex, "");
        assert_eq!(singer.romanized_name, "");
    }

    #[test]
    fn test_missing_required_song_column_is_fatal() {
        let songs = Table::from_rows(SONG_SHEET, &["SongId"], Vec::new());
        let err = catalog_from_tables(&songs, &singer_table()).unwrap_err();
        assert!(err.to_string().contains("Format"));
    }
}
