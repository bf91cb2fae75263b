//! Loosely typed spreadsheet cell values

use calamine::{Data, ExcelDateTime};
use chrono::NaiveTime;
use std::fmt;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A single cell as read from a worksheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Blank cell (or a position outside the used range)
    #[default]
    Empty,

    /// Text cell, kept verbatim
    Text(String),

    /// Any numeric cell (integers are widened to f64 by the reader)
    Number(f64),

    /// Boolean cell
    Bool(bool),
}

impl Cell {
    /// Whether the cell carries no value at all
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the cell, parsing text when needed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Empty => None,
        }
    }

    /// Integer view of the cell
    ///
    /// Numbers are truncated toward zero; text must spell a plain integer
    /// (`"12"` parses, `"12.0"` does not).
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Cell::Number(_) => None,
            Cell::Text(s) => s.trim().parse::<i64>().ok(),
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Empty => None,
        }
    }

    /// Textual rendering used for every output field
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => f.write_str(&format_number(*n)),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
        }
    }
}

/// Integral values print without a decimal part (`12.0` -> `12`)
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        if n == 0.0 {
            "0".to_string()
        } else {
            format!("{:.0}", n)
        }
    } else {
        n.to_string()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Text(format_datetime(dt)),
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Render a date/time cell as its displayed value rather than the serial
///
/// Serials below one day are clock times (`00:03:35`), `[h]:mm:ss` cells are
/// durations (`0:03:35`), anything else is a full timestamp
/// (`2024-01-05 10:00:00`).
fn format_datetime(dt: &ExcelDateTime) -> String {
    let serial = dt.as_f64();

    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            let total = duration.num_seconds();
            let sign = if total < 0 { "-" } else { "" };
            let total = total.abs();
            return format!(
                "{}{}:{:02}:{:02}",
                sign,
                total / 3600,
                (total / 60) % 60,
                total % 60
            );
        }
    } else if (0.0..1.0).contains(&serial) {
        let seconds = (serial * SECONDS_PER_DAY).round() as u32;
        if let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0) {
            return time.format("%H:%M:%S").to_string();
        }
    } else if let Some(datetime) = dt.as_datetime() {
        return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    format_number(serial)
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}
