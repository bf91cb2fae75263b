//! `SINGERLIST.sin` and `singerinfo.txt` lines

use super::DELIMITER;
use crate::model::Singer;
use crate::reference::ReferenceTables;

/// Number of fields in a `SINGERLIST.sin` line
pub const SINGERLIST_FIELDS: usize = 5;

/// Number of fields in a `singerinfo.txt` line
pub const SINGERINFO_FIELDS: usize = 4;

/// One `SINGERLIST.sin` line: id, name, phonetic key, singer type, `1`
pub fn singerlist_line(singer: &Singer, refs: &ReferenceTables) -> String {
    let singer_type = refs.resolve_singer_type(&singer.country, &singer.sex);
    [
        singer.id.as_str(),
        singer.name.as_str(),
        singer.phonetic.as_str(),
        singer_type.as_str(),
        "1",
    ]
    .join(DELIMITER)
}

/// One `singerinfo.txt` line: id, original name, romanized name, phonetic key
pub fn singerinfo_line(singer: &Singer) -> String {
    [
        singer.id.as_str(),
        singer.original_name.as_str(),
        singer.romanized_name.as_str(),
        singer.phonetic.as_str(),
    ]
    .join(DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singer() -> Singer {
        Singer {
            id: "12".to_string(),
            name: "Ana".to_string(),
            original_name: "아나".to_string(),
            romanized_name: "Ana R".to_string(),
            phonetic: "AN".to_string(),
            country: "KR".to_string(),
            sex: "F".to_string(),
        }
    }

    #[test]
    fn test_singerlist_line() {
        let mut refs = ReferenceTables::new();
        refs.insert_singer_type("KR", "F", Some(6));

        assert_eq!(singerlist_line(&singer(), &refs), "12||Ana||AN||6||1");
        assert_eq!(
            singerlist_line(&singer(), &ReferenceTables::new()),
            "12||Ana||AN||||1"
        );
    }

    #[test]
    fn test_singerinfo_line_keeps_multibyte_names() {
        let line = singerinfo_line(&singer());
        assert_eq!(line, "12||아나||Ana R||AN");
        assert_eq!(line.split(DELIMITER).count(), SINGERINFO_FIELDS);
    }
}
