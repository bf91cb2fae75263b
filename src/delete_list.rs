//! Delete-list classification
//!
//! The `Delete Song` sheet lists song ids scheduled for removal, often with a
//! note in parentheses. Valid ids still present in the catalog go to the
//! enable list, the rest to the disable list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

/// 8 digits, optionally followed by one uppercase letter
static SONG_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}[A-Z]?$").unwrap());

/// Parenthesized annotation together with the whitespace before it
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)").unwrap());

/// Sorted, de-duplicated outcome of a delete-list run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Ids present in the catalog (`ENABLESONG.cbso`)
    pub enable: Vec<String>,

    /// Ids absent from the catalog (`DISABLESONG.bso`)
    pub disable: Vec<String>,
}

/// Strip annotations and validate; `None` when the entry is not a song id
pub fn clean_entry(raw: &str) -> Option<String> {
    let cleaned = ANNOTATION.replace_all(raw, "");
    let cleaned = cleaned.trim();
    SONG_ID.is_match(cleaned).then(|| cleaned.to_string())
}

/// Partition delete-list entries by catalog membership
///
/// Invalid entries are dropped. Both lists come out sorted and unique.
pub fn classify<S: AsRef<str>>(entries: &[S], catalog_ids: &HashSet<&str>) -> Classification {
    let mut enable = BTreeSet::new();
    let mut disable = BTreeSet::new();
    let mut rejected = 0usize;

    for entry in entries {
        match clean_entry(entry.as_ref()) {
            Some(id) if catalog_ids.contains(id.as_str()) => {
                enable.insert(id);
            }
            Some(id) => {
                disable.insert(id);
            }
            None => {
                log::debug!("Delete-list entry {:?} is not a song id, skipped", entry.as_ref());
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        log::info!("{} delete-list entries rejected as malformed", rejected);
    }

    Classification {
        enable: enable.into_iter().collect(),
        disable: disable.into_iter().collect(),
    }
}
