//! Artifact files in the output directory

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// The six files an export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    SongList,
    SongInfo,
    SingerList,
    SingerInfo,
    EnableSongs,
    DisableSongs,
}

impl Artifact {
    /// Fixed file name expected by the jukebox platform
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::SongList => "SONGLIST.son",
            Artifact::SongInfo => "songinfo.txt",
            Artifact::SingerList => "SINGERLIST.sin",
            Artifact::SingerInfo => "singerinfo.txt",
            Artifact::EnableSongs => "ENABLESONG.cbso",
            Artifact::DisableSongs => "DISABLESONG.bso",
        }
    }

    /// Delete-list files always end with a newline, even when empty
    fn trailing_newline(self) -> bool {
        matches!(self, Artifact::EnableSongs | Artifact::DisableSongs)
    }
}

/// Writes artifacts into one output directory
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Make sure the output directory exists
    pub fn init(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.output_dir))
    }

    /// Full path of an artifact
    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.output_dir.join(artifact.file_name())
    }

    /// Write lines joined by `\n` as UTF-8, replacing any previous file
    pub fn write(&self, artifact: Artifact, lines: &[String]) -> Result<PathBuf> {
        let path = self.path(artifact);

        let mut content = lines.join("\n");
        if artifact.trailing_newline() {
            content.push('\n');
        }

        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

        log::debug!("Wrote {} lines to {:?}", lines.len(), path);
        Ok(path)
    }
}
