//! Record formatting for the jukebox platform's pipe-delimited files
//!
//! Every line is a sequence of fields joined by `||`. Formatters are pure:
//! they borrow the catalog and the reference tables and return owned lines.

mod singer;
mod singer_name;
mod song;

pub use singer::{singerinfo_line, singerlist_line, SINGERINFO_FIELDS, SINGERLIST_FIELDS};
pub use singer_name::{category_prefix, select_singer_name, NameVariant};
pub use song::{
    singer_display_names, songinfo_line, songlist_line, SONGINFO_FIELDS, SONGLIST_FIELDS,
};

/// Field separator shared by all four catalog artifacts
pub const DELIMITER: &str = "||";
