//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::progress::ProgressSink;
use super::writer::{Artifact, OutputWriter};
use crate::delete_list::{classify, Classification};
use crate::error::ExportError;
use crate::format::{singerinfo_line, singerlist_line, songinfo_line, songlist_line};
use crate::model::Catalog;
use crate::reference::{load_reference, ReferenceTables};
use crate::workbook::{read_catalog, read_delete_entries, Workbook};
use anyhow::Result;
use std::path::PathBuf;

/// What happened to the delete-list artifact pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteListOutcome {
    /// Both files written
    Written { enabled: usize, disabled: usize },

    /// Sheet absent or unreadable; the rest of the run was unaffected
    Skipped(String),
}

/// Result of a successful export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Lines written to `SONGLIST.son` and `songinfo.txt`
    pub songs: usize,

    /// Lines written to `SINGERLIST.sin` and `singerinfo.txt`
    pub singers: usize,

    pub delete_list: DeleteListOutcome,

    pub output_dir: PathBuf,
}

/// Main export pipeline
pub struct ExportPipeline<P: ProgressSink> {
    config: ExportConfig,
    writer: OutputWriter,
    progress: P,
}

impl<P: ProgressSink> ExportPipeline<P> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, progress: P) -> Self {
        let writer = OutputWriter::new(config.output_dir.clone());

        Self {
            config,
            writer,
            progress,
        }
    }

    /// Run the complete export, reporting the terminal outcome to the progress sink
    pub fn export(&self) -> Result<ExportSummary> {
        match self.run() {
            Ok(summary) => {
                self.progress.message("✅ All processing complete!");
                Ok(summary)
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.progress.message(&format!("❌ Export failed: {:#}", e));
                Err(e)
            }
        }
    }

    fn run(&self) -> Result<ExportSummary> {
        // Nothing is read or written without the reference workbook
        if !self.config.reference.exists() {
            return Err(ExportError::MissingReference(self.config.reference.clone()).into());
        }

        log::info!("Starting export");
        log::info!("Input: {:?}", self.config.input);
        log::info!("Output: {:?}", self.config.output_dir);

        self.progress
            .message(&format!("🔍 Reading file: {}", self.config.input.display()));

        // Step 1: Load catalog and reference tables
        let mut workbook = Workbook::open(&self.config.input)?;
        let catalog = read_catalog(&mut workbook, self.config.row_limit)?;
        let refs = load_reference(&self.config.reference)?;

        // Step 2: Write the four catalog artifacts
        self.writer.init()?;
        self.write_catalog(&catalog, &refs)?;

        // Step 3: Delete list, failures stay local to its two files
        let delete_list = self.process_delete_list(&mut workbook, &catalog);

        log::info!("Export complete!");
        Ok(ExportSummary {
            songs: catalog.song_count(),
            singers: catalog.singer_count(),
            delete_list,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write `SONGLIST.son`, `songinfo.txt`, `SINGERLIST.sin` and `singerinfo.txt`
    pub fn write_catalog(&self, catalog: &Catalog, refs: &ReferenceTables) -> Result<()> {
        self.write_artifact(Artifact::SongList, || {
            catalog
                .songs()
                .iter()
                .map(|song| songlist_line(song, catalog, refs))
                .collect()
        })?;

        self.write_artifact(Artifact::SongInfo, || {
            catalog.songs().iter().map(songinfo_line).collect()
        })?;

        self.write_artifact(Artifact::SingerList, || {
            catalog
                .singers()
                .iter()
                .map(|singer| singerlist_line(singer, refs))
                .collect()
        })?;

        self.write_artifact(Artifact::SingerInfo, || {
            catalog.singers().iter().map(singerinfo_line).collect()
        })?;

        Ok(())
    }

    /// Classify delete-list entries against the catalog and write both files
    pub fn write_delete_list(
        &self,
        entries: &[String],
        catalog: &Catalog,
    ) -> Result<Classification> {
        let classification = classify(entries, &catalog.song_ids());

        self.writer
            .write(Artifact::EnableSongs, &classification.enable)?;
        self.writer
            .write(Artifact::DisableSongs, &classification.disable)?;

        log::info!(
            "Delete list: {} enabled, {} disabled",
            classification.enable.len(),
            classification.disable.len()
        );

        Ok(classification)
    }

    fn process_delete_list(&self, workbook: &mut Workbook, catalog: &Catalog) -> DeleteListOutcome {
        self.progress.message("📦 Processing Delete Song...");

        let result = read_delete_entries(workbook)
            .and_then(|entries| self.write_delete_list(&entries, catalog));

        match result {
            Ok(classification) => {
                self.progress.message(&format!(
                    "✅ {} and {} done",
                    Artifact::EnableSongs.file_name(),
                    Artifact::DisableSongs.file_name()
                ));
                DeleteListOutcome::Written {
                    enabled: classification.enable.len(),
                    disabled: classification.disable.len(),
                }
            }
            Err(e) => {
                log::warn!("Delete list skipped: {:#}", e);
                self.progress
                    .message(&format!("❌ Delete Song sheet error: {:#}", e));
                DeleteListOutcome::Skipped(format!("{:#}", e))
            }
        }
    }

    fn write_artifact<F>(&self, artifact: Artifact, build: F) -> Result<()>
    where
        F: FnOnce() -> Vec<String>,
    {
        self.progress
            .message(&format!("📦 Building {}...", artifact.file_name()));

        let lines = build();
        self.writer.write(artifact, &lines)?;

        self.progress.message(&format!(
            "✅ {} done ({} lines)",
            artifact.file_name(),
            lines.len()
        ));
        Ok(())
    }
}
