//! Immutable reference lookups

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::hash::Hash;

/// Sentinel genre id for "no match"
pub const UNKNOWN_GENRE: i64 = -1;

static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

/// The four cross-reference tables of one run
///
/// Built once by the loader, then only read. Every lookup is total: a
/// missing or unreadable input resolves to `""` or [`UNKNOWN_GENRE`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Source loudness (integer text) -> target loudness; `None` when the
    /// target cell was not numeric
    volume: HashMap<String, Option<i64>>,

    /// Upper-cased source language code -> target code
    language: HashMap<String, String>,

    /// Lower-cased genre name -> target genre id
    genre: HashMap<String, Option<i64>>,

    /// (country, sex) -> singer type id
    singer_type: HashMap<(String, String), Option<i64>>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a volume row; the source is reduced to the first integer it contains
    ///
    /// Returns `false` when the source holds no integer (the row can never match).
    pub fn insert_volume(&mut self, source: &str, target: Option<f64>) -> bool {
        let Some(key) = LEADING_INT.find(source) else {
            return false;
        };
        let target = target.filter(|t| t.is_finite()).map(|t| t.trunc() as i64);
        insert_first(&mut self.volume, key.as_str().to_string(), target, "volume");
        true
    }

    /// Add a language row; the source code is trimmed and upper-cased
    pub fn insert_language(&mut self, source: &str, target: &str) {
        let key = normalize_language(source);
        if key.is_empty() {
            return;
        }
        insert_first(&mut self.language, key, target.to_string(), "language");
    }

    /// Add a genre row; the name is trimmed and lower-cased
    pub fn insert_genre(&mut self, name: &str, id: Option<i64>) {
        insert_first(&mut self.genre, normalize_genre(name), id, "genre");
    }

    /// Add a singer-type row keyed by the exact (country, sex) pair
    pub fn insert_singer_type(&mut self, country: &str, sex: &str, id: Option<i64>) {
        let key = (country.to_string(), sex.to_string());
        insert_first(&mut self.singer_type, key, id, "singer type");
    }

    /// Target loudness for a source loudness value
    ///
    /// Only the part before the first `.` is read, as a signed integer.
    pub fn resolve_volume(&self, source: &str) -> String {
        let Some(whole) = source.split('.').next() else {
            return String::new();
        };
        let Ok(value) = whole.trim().parse::<i64>() else {
            return String::new();
        };

        match self.volume.get(&value.to_string()) {
            Some(Some(target)) => target.to_string(),
            _ => String::new(),
        }
    }

    /// Target language code for a source language code
    pub fn resolve_language(&self, code: &str) -> String {
        let key = normalize_language(code);
        if key.is_empty() {
            return String::new();
        }
        self.language.get(&key).cloned().unwrap_or_default()
    }

    /// Target genre id for a source genre name, [`UNKNOWN_GENRE`] when absent
    pub fn resolve_genre(&self, name: &str) -> i64 {
        if name.is_empty() {
            return UNKNOWN_GENRE;
        }
        self.genre
            .get(&normalize_genre(name))
            .copied()
            .flatten()
            .unwrap_or(UNKNOWN_GENRE)
    }

    /// Singer type id for a (country, sex) pair; inputs are trimmed first
    pub fn resolve_singer_type(&self, country: &str, sex: &str) -> String {
        let key = (country.trim().to_string(), sex.trim().to_string());
        match self.singer_type.get(&key) {
            Some(Some(id)) => id.to_string(),
            _ => String::new(),
        }
    }

    pub fn volume_count(&self) -> usize {
        self.volume.len()
    }

    pub fn language_count(&self) -> usize {
        self.language.len()
    }

    pub fn genre_count(&self) -> usize {
        self.genre.len()
    }

    pub fn singer_type_count(&self) -> usize {
        self.singer_type.len()
    }
}

fn normalize_language(code: &str) -> String {
    code.trim().to_uppercase()
}

fn normalize_genre(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Insert unless the key is already present; duplicates are reported, not merged
fn insert_first<K, V>(map: &mut HashMap<K, V>, key: K, value: V, table: &str)
where
    K: Eq + Hash + std::fmt::Debug,
{
    if map.contains_key(&key) {
        log::warn!(
            "Duplicate {} reference key {:?}, keeping the first row",
            table,
            key
        );
        return;
    }
    map.insert(key, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ReferenceTables {
        let mut refs = ReferenceTables::new();
        refs.insert_volume("-5 dB", Some(12.0));
        refs.insert_volume("3", Some(7.9));
        refs.insert_volume("4", None);
        refs.insert_volume("-5", Some(99.0));
        refs.insert_language(" ind ", "ID");
        refs.insert_genre(" Pop Rock ", Some(17));
        refs.insert_genre("broken", None);
        refs.insert_singer_type("ID", "M", Some(3));
        refs
    }

    #[test]
    fn test_volume_lookup() {
        let refs = tables();
        assert_eq!(refs.resolve_volume("-5"), "12");
        assert_eq!(refs.resolve_volume("-5.8"), "12");
        assert_eq!(refs.resolve_volume("-05"), "12");
        assert_eq!(refs.resolve_volume("3"), "7");
        assert_eq!(refs.resolve_volume("4"), "");
        assert_eq!(refs.resolve_volume("6"), "");
        assert_eq!(refs.resolve_volume(""), "");
        assert_eq!(refs.resolve_volume("loud"), "");
    }

    #[test]
    fn test_volume_first_row_wins() {
        let refs = tables();
        assert_eq!(refs.volume_count(), 3);
        assert_eq!(refs.resolve_volume("-5"), "12");
    }

    #[test]
    fn test_volume_source_without_integer_is_rejected() {
        let mut refs = ReferenceTables::new();
        assert!(!refs.insert_volume("n/a", Some(1.0)));
        assert_eq!(refs.volume_count(), 0);
    }

    #[test]
    fn test_language_lookup_is_case_and_space_insensitive() {
        let refs = tables();
        assert_eq!(refs.resolve_language("IND"), "ID");
        assert_eq!(refs.resolve_language(" ind"), "ID");
        assert_eq!(refs.resolve_language("eng"), "");
        assert_eq!(refs.resolve_language(""), "");
    }

    #[test]
    fn test_genre_lookup() {
        let refs = tables();
        assert_eq!(refs.resolve_genre("pop rock"), 17);
        assert_eq!(refs.resolve_genre("  POP ROCK"), 17);
        assert_eq!(refs.resolve_genre("broken"), UNKNOWN_GENRE);
        assert_eq!(refs.resolve_genre("jazz"), UNKNOWN_GENRE);
        assert_eq!(refs.resolve_genre(""), UNKNOWN_GENRE);
    }

    #[test]
    fn test_singer_type_lookup() {
        let refs = tables();
        assert_eq!(refs.resolve_singer_type("ID", "M"), "3");
        assert_eq!(refs.resolve_singer_type(" ID ", "M "), "3");
        assert_eq!(refs.resolve_singer_type("ID", "F"), "");
        assert_eq!(refs.resolve_singer_type("", ""), "");
    }
}
