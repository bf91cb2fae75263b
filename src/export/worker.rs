//! Background export for callers that must stay responsive
//!
//! [`spawn_export`] moves the whole pipeline onto a worker thread. Progress
//! messages come back over a channel; the caller polls for them and for
//! completion at its own pace. There is no cancellation: once started, the
//! run goes to completion and the caller may only ignore the result.

use super::config::ExportConfig;
use super::pipeline::{ExportPipeline, ExportSummary};
use super::progress::ChannelProgress;
use anyhow::{anyhow, Result};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// Handle to an export running on a worker thread
pub struct ExportHandle {
    messages: Receiver<String>,
    worker: JoinHandle<Result<ExportSummary>>,
}

/// Start an export on a new thread
pub fn spawn_export(config: ExportConfig) -> ExportHandle {
    let (tx, rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        log::debug!("Export worker started");
        ExportPipeline::new(config, ChannelProgress::new(tx)).export()
    });

    ExportHandle {
        messages: rx,
        worker,
    }
}

impl ExportHandle {
    /// Next pending progress message, without blocking
    pub fn try_recv_message(&self) -> Option<String> {
        self.messages.try_recv().ok()
    }

    /// All progress messages pending right now
    pub fn drain_messages(&self) -> Vec<String> {
        self.messages.try_iter().collect()
    }

    /// Whether the worker has finished (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and return the run's outcome
    pub fn join(self) -> Result<ExportSummary> {
        self.worker
            .join()
            .map_err(|_| anyhow!("export worker panicked"))?
    }
}
