//! Reference resolution
//!
//! The reference workbook maps the catalog's source vocabulary (loudness
//! values, language codes, genre names, singer country/sex) onto the
//! jukebox platform's ids. It is loaded once per run into an immutable
//! [`ReferenceTables`] that formatters borrow.

mod loader;
mod tables;

pub use loader::{
    build_reference, load_reference, GENRE_MARKER, LANGUAGE_SHEET, REFERENCE_SHEET,
    SINGER_TYPE_SHEET,
};
pub use tables::{ReferenceTables, UNKNOWN_GENRE};
