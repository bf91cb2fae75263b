//! Catalog data model
//!
//! Songs and singers as read from the input workbook, independent of
//! both the spreadsheet layout and the pipe-delimited output formats.

mod catalog;
mod singer;
mod song;

pub use catalog::Catalog;
pub use singer::Singer;
pub use song::{Song, COMPOSER_SLOTS, GENRE_SLOTS, SINGER_SLOTS};
