//! Human-readable progress reporting
//!
//! The pipeline narrates each step to a [`ProgressSink`]; callers choose
//! whether that goes to the log, across a channel to another thread, or
//! into memory.

use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// Receiver of progress and status messages
pub trait ProgressSink: Send + Sync {
    fn message(&self, msg: &str);
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn message(&self, msg: &str) {
        (**self).message(msg)
    }
}

/// Forwards messages to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn message(&self, msg: &str) {
        log::info!("{}", msg);
    }
}

/// Sends messages over a channel, for callers polling from another thread
#[derive(Debug)]
pub struct ChannelProgress {
    tx: Sender<String>,
}

impl ChannelProgress {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgress {
    fn message(&self, msg: &str) {
        log::debug!("{}", msg);
        // A caller that stopped listening only loses the narration
        let _ = self.tx.send(msg.to_string());
    }
}

/// Collects messages in memory
#[derive(Debug, Default)]
pub struct VecProgress {
    messages: Mutex<Vec<String>>,
}

impl VecProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ProgressSink for VecProgress {
    fn message(&self, msg: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_vec_progress_keeps_order() {
        let progress = VecProgress::new();
        progress.message("one");
        (&progress).message("two");
        assert_eq!(progress.messages(), vec!["one", "two"]);
    }

    #[test]
    fn test_channel_progress_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let progress = ChannelProgress::new(tx);
        progress.message("hello");
        assert_eq!(rx.recv().unwrap(), "hello");

        drop(rx);
        progress.message("nobody listening");
    }
}
