//! Identifier normalization
//!
//! Id columns arrive as integers, floats (`12.0`), numeric text or junk.
//! Everything is folded to a plain integer string, or to `""` when the
//! value cannot be read as a number.

use crate::workbook::Cell;

/// Canonicalize an identifier cell
///
/// The value is read as a number and truncated toward zero; missing,
/// non-numeric and non-finite values all become an empty string.
pub fn normalize_id(value: &Cell) -> String {
    match value.as_f64() {
        Some(n) if n.is_finite() => {
            let whole = n.trunc();
            if whole == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", whole)
            }
        }
        _ => String::new(),
    }
}

/// [`normalize_id`] for values that are already plain text
pub fn normalize_id_str(value: &str) -> String {
    normalize_id(&Cell::from(value))
}
