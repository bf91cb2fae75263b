use super::{Singer, Song};
use std::collections::{HashMap, HashSet};

/// The song and singer tables of one input workbook
///
/// Rows keep their sheet order, which is also the output order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,

    singers: Vec<Singer>,

    /// Singer id -> position in `singers`, first row wins
    singer_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog and index its singers by id
    pub fn new(songs: Vec<Song>, singers: Vec<Singer>) -> Self {
        let mut singer_index = HashMap::new();
        for (idx, singer) in singers.iter().enumerate() {
            if singer.id.is_empty() {
                continue;
            }
            if singer_index.contains_key(&singer.id) {
                log::warn!("Duplicate singer id {}, keeping the first row", singer.id);
                continue;
            }
            singer_index.insert(singer.id.clone(), idx);
        }

        Self {
            songs,
            singers,
            singer_index,
        }
    }

    /// Get a singer by id; empty ids never match
    pub fn singer(&self, id: &str) -> Option<&Singer> {
        self.singer_index.get(id).map(|&idx| &self.singers[idx])
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn singers(&self) -> &[Singer] {
        &self.singers
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn singer_count(&self) -> usize {
        self.singers.len()
    }

    /// Keep only the first `limit` songs
    pub fn truncate_songs(&mut self, limit: usize) {
        self.songs.truncate(limit);
    }

    /// Trimmed ids of every song currently in the catalog
    pub fn song_ids(&self) -> HashSet<&str> {
        self.songs.iter().map(Song::catalog_id).collect()
    }
}
