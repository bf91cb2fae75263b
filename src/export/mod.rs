//! Export orchestration and artifact output

pub mod config;
pub mod pipeline;
pub mod progress;
pub mod worker;
pub mod writer;

pub use config::ExportConfig;
pub use pipeline::{DeleteListOutcome, ExportPipeline, ExportSummary};
pub use progress::{ChannelProgress, LogProgress, ProgressSink, VecProgress};
pub use worker::{spawn_export, ExportHandle};
pub use writer::{Artifact, OutputWriter};
