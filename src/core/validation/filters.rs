//! Reusable field filters
//!
//! Filters normalize entity field values before validation runs.

/// Filter: trim whitespace from a string
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: lowercase a string (wire-form enum values)
pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

/// Filter: round a number to the given decimal places
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
