//! SON/SIN exporter - spreadsheet catalog to jukebox platform files
//!
//! This library converts a song/singer catalog kept in a workbook into the
//! pipe-delimited `SONGLIST.son`, `songinfo.txt`, `SINGERLIST.sin` and
//! `singerinfo.txt` files plus the `ENABLESONG.cbso`/`DISABLESONG.bso`
//! delete lists, resolving source codes through a reference workbook.

pub mod delete_list;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod normalize;
pub mod reference;
pub mod validation;
pub mod workbook;

pub use error::ExportError;
pub use export::config::ExportConfig;
pub use export::pipeline::{ExportPipeline, ExportSummary};
