use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};
use sonsin_exporter::export::{spawn_export, DeleteListOutcome, VecProgress};
use sonsin_exporter::validation::{check_after_export, validate_export};
use sonsin_exporter::{ExportConfig, ExportError, ExportPipeline};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Cell value for fixture sheets
enum V {
    S(&'static str),
    N(f64),
    /// Clock value written with an `hh:mm:ss` number format
    Time(u16, u8, u8),
    Blank,
}

use V::{Blank, Time, N, S};

fn add_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<V>]) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            match value {
                S(s) => {
                    sheet.write_string(r as u32, c as u16, *s)?;
                }
                N(n) => {
                    sheet.write_number(r as u32, c as u16, *n)?;
                }
                Time(h, m, sec) => {
                    let time = ExcelDateTime::from_hms(*h, *m, *sec)?;
                    let format = Format::new().set_num_format("hh:mm:ss");
                    sheet.write_datetime_with_format(r as u32, c as u16, &time, &format)?;
                }
                Blank => {}
            }
        }
    }
    Ok(())
}

/// Reference workbook at `<dir>/Reference/Reference.xlsx`
fn create_reference(dir: &Path) -> PathBuf {
    let path = dir.join("Reference").join("Reference.xlsx");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut workbook = Workbook::new();
    add_sheet(
        &mut workbook,
        "Reference",
        &[
            vec![S("FFMPEG VOLUME"), S("STARNET VOLUME"), Blank, S("SongTypeID Convert"), S("ID")],
            vec![N(-5.0), N(8.0), Blank, S("Pop"), N(3.0)],
            vec![N(-6.0), N(10.0), Blank, S("Rock"), N(5.0)],
        ],
    )
    .unwrap();
    add_sheet(
        &mut workbook,
        "Ref2",
        &[vec![S("IND"), S("ID")], vec![S("ENG"), S("EN")]],
    )
    .unwrap();
    add_sheet(
        &mut workbook,
        "RefSing",
        &[
            vec![S("Src1"), S("Src2"), S("Data")],
            vec![S("ID"), S("M"), N(1.0)],
            vec![S("ID"), S("F"), N(2.0)],
        ],
    )
    .unwrap();
    workbook.save(&path).unwrap();

    path
}

fn song_rows() -> Vec<Vec<V>> {
    vec![
        vec![
            S("SongId"), S("Song"), S("PYStr1"), S("SongLen"), S("SongType"), S("SongLan"),
            S("SingId1"), S("SingId2"), S("SingId3"), S("SingId4"), S("Format"), S("FFMpeg"),
            S("Genre1"), S("Genre2"), S("Genre3"), S("Genre4"), S("OriginalSong"),
            S("COMPOSER1"), S("COMPOSER2"),
        ],
        vec![
            S("01000001"), S("Kasih"), S("KS"), N(215.0), S("01"), S("ind"),
            N(12.0), N(13.0), Blank, Blank, S("mp4"), N(-5.0),
            S("pop"), S(" ROCK "), Blank, Blank, S("Kasih Asli"),
            S("Budi"), S("Sari"),
        ],
        vec![
            S("03000002"), S("Sakura"), S("SKR"), N(300.0), S("03"), S("jpn"),
            N(14.0), Blank, Blank, Blank, S("mp3"), N(-6.0),
            S("Jazz"), Blank, Blank, Blank, S("桜"),
            Blank, Blank,
        ],
    ]
}

fn singer_rows() -> Vec<Vec<V>> {
    vec![
        vec![
            S("SingId"), S("Sing"), S("OriginalSing"), S("RomanSing"), S("PYStr"),
            S("SingCountry"), S("SingSex"),
        ],
        vec![N(12.0), S("Ana"), Blank, Blank, S("AN"), S("ID"), S("F")],
        vec![N(13.0), S("Bayu"), Blank, Blank, S("BY"), S("ID"), S("M")],
        vec![N(14.0), S("Hikaru"), S("光"), S("Hikaru R"), S("HK"), S("JP"), S("F")],
    ]
}

fn delete_rows() -> Vec<Vec<V>> {
    vec![
        vec![S("SongId")],
        vec![S("01000001 (old)")],
        vec![S("1234567")],
        vec![S("99999999Z")],
        vec![S("99999999z")],
        vec![S("03000002")],
        vec![S("99999999Z")],
    ]
}

/// Catalog workbook at `<dir>/catalog/songs.xlsx`
fn create_catalog(dir: &Path, with_delete_sheet: bool) -> PathBuf {
    let delete = with_delete_sheet.then(delete_rows);
    create_catalog_with(dir, &song_rows(), delete.as_deref())
}

fn create_catalog_with(dir: &Path, songs: &[Vec<V>], delete: Option<&[Vec<V>]>) -> PathBuf {
    let path = dir.join("catalog").join("songs.xlsx");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut workbook = Workbook::new();
    add_sheet(&mut workbook, "Song", songs).unwrap();
    add_sheet(&mut workbook, "Sing", &singer_rows()).unwrap();
    if let Some(rows) = delete {
        add_sheet(&mut workbook, "Delete Song", rows).unwrap();
    }
    workbook.save(&path).unwrap();

    path
}

/// Like [`setup`], with a custom `Song` sheet and `Delete Song` sheet
fn setup_with(songs: &[Vec<V>], delete: Option<&[Vec<V>]>) -> (TempDir, ExportConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reference = create_reference(temp_dir.path());
    let input = create_catalog_with(temp_dir.path(), songs, delete);
    let config = ExportConfig::new(input).with_reference(reference);
    (temp_dir, config)
}

fn songlist_fields(dir: &Path, line: usize) -> Vec<String> {
    read(dir, "SONGLIST.son")
        .lines()
        .nth(line)
        .unwrap()
        .split("||")
        .map(str::to_string)
        .collect()
}

fn setup(with_delete_sheet: bool) -> (TempDir, ExportConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reference = create_reference(temp_dir.path());
    let input = create_catalog(temp_dir.path(), with_delete_sheet);
    let config = ExportConfig::new(input).with_reference(reference);
    (temp_dir, config)
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("{}: {}", name, e))
}

#[test]
fn test_full_export_writes_all_artifacts() {
    let (_temp_dir, config) = setup(true);
    let out = config.output_dir.clone();
    let progress = VecProgress::new();

    let summary = ExportPipeline::new(config, &progress).export().unwrap();

    assert_eq!(summary.songs, 2);
    assert_eq!(summary.singers, 3);
    assert_eq!(
        summary.delete_list,
        DeleteListOutcome::Written {
            enabled: 2,
            disabled: 1
        }
    );

    assert_eq!(
        read(&out, "SONGLIST.son"),
        "MUSIC||8||01000001||01000001.mp4||Kasih||KS||215||01||ind||Ana, Bayu||1||2||ID\
         ||-1||-1||-1||12||13||-1||-1||3||5||-1||-1\
         ||C||291308162||GOOD||GOOD||GOOD||GOOD||01000001||1||1\n\
         MUSIC||10||03000002||03000002.mp3||Sakura||SKR||300||03||jpn||光||1||2||\
         ||-1||-1||-1||14||-1||-1||-1||-1||-1||-1||-1\
         ||C||291308162||GOOD||GOOD||GOOD||GOOD||03000002||1||1"
    );
    assert_eq!(
        read(&out, "songinfo.txt"),
        "01000001||Kasih Asli||||||Budi, Sari||KS\n03000002||桜||||||||SKR"
    );
    assert_eq!(
        read(&out, "SINGERLIST.sin"),
        "12||Ana||AN||2||1\n13||Bayu||BY||1||1\n14||Hikaru||HK||||1"
    );
    assert_eq!(
        read(&out, "singerinfo.txt"),
        "12||||||AN\n13||||||BY\n14||光||Hikaru R||HK"
    );
    assert_eq!(read(&out, "ENABLESONG.cbso"), "01000001\n03000002\n");
    assert_eq!(read(&out, "DISABLESONG.bso"), "99999999Z\n");

    let messages = progress.messages();
    assert!(messages[0].starts_with("🔍 Reading file:"));
    assert_eq!(messages.last().unwrap(), "✅ All processing complete!");
}

#[test]
fn test_songlist_round_trip() {
    let (_temp_dir, config) = setup(true);
    let out = config.output_dir.clone();

    ExportPipeline::new(config, VecProgress::new()).export().unwrap();

    let content = read(&out, "SONGLIST.son");
    let first = content.lines().next().unwrap();
    let fields: Vec<&str> = first.split("||").collect();
    assert_eq!(fields.len(), 33);
    assert_eq!(fields[9], "Ana, Bayu");
    assert_eq!(fields[30], "01000001");

    let report = validate_export(&out).unwrap();
    assert_eq!(report.songs, 2);
    assert_eq!(report.singers, 3);
}

#[test]
fn test_missing_delete_sheet_is_not_fatal() {
    let (_temp_dir, config) = setup(false);
    let out = config.output_dir.clone();
    let progress = VecProgress::new();

    let summary = ExportPipeline::new(config, &progress).export().unwrap();

    assert!(matches!(summary.delete_list, DeleteListOutcome::Skipped(_)));
    assert!(out.join("SONGLIST.son").exists());
    assert!(out.join("singerinfo.txt").exists());
    assert!(!out.join("ENABLESONG.cbso").exists());
    assert!(!out.join("DISABLESONG.bso").exists());

    let messages = progress.messages();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("❌ Delete Song sheet error")));
    assert_eq!(messages.last().unwrap(), "✅ All processing complete!");
}

#[test]
fn test_malformed_delete_sheet_is_not_fatal() {
    let delete = [vec![S("Id")], vec![S("01000001")]];
    let (_temp_dir, config) = setup_with(&song_rows(), Some(&delete[..]));
    let out = config.output_dir.clone();
    let progress = VecProgress::new();

    let summary = ExportPipeline::new(config, &progress).export().unwrap();

    match &summary.delete_list {
        DeleteListOutcome::Skipped(reason) => assert!(reason.contains("SongId"), "{}", reason),
        other => panic!("expected skipped delete list, got {:?}", other),
    }
    for name in ["SONGLIST.son", "songinfo.txt", "SINGERLIST.sin", "singerinfo.txt"] {
        assert!(out.join(name).exists(), "{} missing", name);
    }
    assert!(!out.join("ENABLESONG.cbso").exists());
    assert!(!out.join("DISABLESONG.bso").exists());
    assert_eq!(read(&out, "SONGLIST.son").lines().count(), 2);
    assert_eq!(progress.messages().last().unwrap(), "✅ All processing complete!");
}

#[test]
fn test_time_formatted_duration_is_written_as_clock_time() {
    let mut songs = song_rows();
    songs[1][3] = Time(0, 3, 35);
    let (_temp_dir, config) = setup_with(&songs, None);
    let out = config.output_dir.clone();

    ExportPipeline::new(config, VecProgress::new()).export().unwrap();

    assert_eq!(songlist_fields(&out, 0)[6], "00:03:35");
    assert_eq!(songlist_fields(&out, 1)[6], "300");
}

#[test]
fn test_line_break_in_title_still_exports() {
    let mut songs = song_rows();
    songs[1][1] = S("Line one\nLine two");
    let (_temp_dir, config) = setup_with(&songs, None);
    let out = config.output_dir.clone();

    let summary = ExportPipeline::new(config, VecProgress::new()).export().unwrap();

    assert_eq!(summary.songs, 2);
    assert!(read(&out, "SONGLIST.son").contains("||Line one\nLine two||"));
    assert!(validate_export(&out).is_err());
    assert_eq!(check_after_export(&out), None);
}

#[test]
fn test_row_limit_caps_songs_and_membership() {
    let (_temp_dir, config) = setup(true);
    let out = config.output_dir.clone();

    let summary = ExportPipeline::new(config.with_row_limit(1), VecProgress::new())
        .export()
        .unwrap();

    assert_eq!(summary.songs, 1);
    assert_eq!(summary.singers, 3);
    assert_eq!(read(&out, "SONGLIST.son").lines().count(), 1);
    assert_eq!(read(&out, "ENABLESONG.cbso"), "01000001\n");
    assert_eq!(read(&out, "DISABLESONG.bso"), "03000002\n99999999Z\n");
}

#[test]
fn test_missing_reference_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_catalog(temp_dir.path(), true);
    let out = input.parent().unwrap().to_path_buf();
    let config = ExportConfig::new(input).with_reference(temp_dir.path().join("nope.xlsx"));

    let err = ExportPipeline::new(config, VecProgress::new())
        .export()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::MissingReference(_))
    ));
    assert!(!out.join("SONGLIST.son").exists());
}

#[test]
fn test_missing_song_sheet_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let reference = create_reference(temp_dir.path());
    let input = temp_dir.path().join("empty.xlsx");
    let mut workbook = Workbook::new();
    add_sheet(&mut workbook, "Sing", &singer_rows()).unwrap();
    workbook.save(&input).unwrap();

    let config = ExportConfig::new(input).with_reference(reference);
    let err = ExportPipeline::new(config, VecProgress::new())
        .export()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::MissingSheet { sheet, .. }) if sheet == "Song"
    ));
}

#[test]
fn test_background_export_streams_progress() {
    let (_temp_dir, config) = setup(true);
    let out = config.output_dir.clone();

    let handle = spawn_export(config);
    let mut messages = Vec::new();
    while !handle.is_finished() {
        while let Some(message) = handle.try_recv_message() {
            messages.push(message);
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    messages.extend(handle.drain_messages());
    assert_eq!(handle.try_recv_message(), None);

    let summary = handle.join().unwrap();
    assert_eq!(summary.songs, 2);
    assert!(out.join("DISABLESONG.bso").exists());

    // One message before and after each of the four catalog artifacts
    let artifact_messages = messages
        .iter()
        .filter(|m| m.contains(".son") || m.contains(".sin") || m.contains(".txt"))
        .count();
    assert_eq!(artifact_messages, 8);
    assert_eq!(messages.last().unwrap(), "✅ All processing complete!");
}
