//! Validation utilities
//!
//! Re-reads written artifacts and checks their field layout

mod roundtrip;

pub use roundtrip::{check_after_export, validate_export, ValidationReport};
