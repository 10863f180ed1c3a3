//! Reusable field validators
//!
//! Each validator checks one constraint on one field and reports the field
//! and the violated constraint on failure. Entity constructors call these in
//! a fixed order so the first violation short-circuits construction.

use crate::core::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid pattern"));

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid pattern"));

/// Validator: string length must be within the inclusive range
pub fn string_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        Err(ValidationError::field(
            field,
            format!("must have at least {} characters (currently: {})", min, len),
        ))
    } else if len > max {
        Err(ValidationError::field(
            field,
            format!("must not exceed {} characters (currently: {})", max, len),
        ))
    } else {
        Ok(())
    }
}

/// Validator: string must contain only letters and spaces
pub fn letters_and_spaces(field: &str, value: &str) -> Result<(), ValidationError> {
    if LETTERS_AND_SPACES.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::field(
            field,
            "must contain only letters and spaces",
        ))
    }
}

/// Validator: string must be exactly `count` ASCII digits
pub fn exact_digits(field: &str, value: &str, count: usize) -> Result<(), ValidationError> {
    if value.len() == count && DIGITS_ONLY.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::field(
            field,
            format!("must be exactly {} digits", count),
        ))
    }
}

/// Validator: number must be within the inclusive range
pub fn range_f64(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value < min || value > max {
        Err(ValidationError::field(
            field,
            format!(
                "must be between {} and {} (value: {})",
                min, max, value
            ),
        ))
    } else {
        Ok(())
    }
}

/// Validator: integer must be within the inclusive range
pub fn range_i64(field: &str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        Err(ValidationError::field(
            field,
            format!(
                "must be between {} and {} (value: {})",
                min, max, value
            ),
        ))
    } else {
        Ok(())
    }
}

/// Validator: integer must be strictly positive
pub fn positive_i64(field: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        Err(ValidationError::field(
            field,
            format!("must be positive (value: {})", value),
        ))
    } else {
        Ok(())
    }
}

/// Validator: list must contain at least one entry
pub fn at_least_one<T>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    if items.is_empty() {
        Err(ValidationError::field(
            field,
            "must contain at least one entry",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === string_length() ===

    #[test]
    fn test_string_length_too_short_returns_error() {
        let result = string_length("name", "ab", 3, 100);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 3"));
    }

    #[test]
    fn test_string_length_too_long_returns_error() {
        let result = string_length("name", "abcdef", 1, 5);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceed 5"));
    }

    #[test]
    fn test_string_length_exact_min_returns_ok() {
        assert!(string_length("name", "abc", 3, 10).is_ok());
    }

    #[test]
    fn test_string_length_exact_max_returns_ok() {
        assert!(string_length("name", "abcde", 1, 5).is_ok());
    }

    // === letters_and_spaces() ===

    #[test]
    fn test_letters_and_spaces_plain_name_returns_ok() {
        assert!(letters_and_spaces("name", "Mango Lassi").is_ok());
    }

    #[test]
    fn test_letters_and_spaces_digit_returns_error() {
        let result = letters_and_spaces("name", "Pizza 2");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("letters"));
    }

    #[test]
    fn test_letters_and_spaces_symbol_returns_error() {
        assert!(letters_and_spaces("name", "Fish & Chips").is_err());
    }

    #[test]
    fn test_letters_and_spaces_empty_returns_error() {
        assert!(letters_and_spaces("name", "").is_err());
    }

    // === exact_digits() ===

    #[test]
    fn test_exact_digits_ten_digit_phone_returns_ok() {
        assert!(exact_digits("phone", "9876543210", 10).is_ok());
    }

    #[test]
    fn test_exact_digits_too_short_returns_error() {
        assert!(exact_digits("phone", "12345", 10).is_err());
    }

    #[test]
    fn test_exact_digits_letters_returns_error() {
        assert!(exact_digits("phone", "98765abc10", 10).is_err());
    }

    #[test]
    fn test_exact_digits_with_dashes_returns_error() {
        assert!(exact_digits("phone", "987-654-32", 10).is_err());
    }

    // === range_f64() ===

    #[test]
    fn test_range_f64_below_min_returns_error() {
        let result = range_f64("price", 0.99, 1.0, 100.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_range_f64_above_max_returns_error() {
        assert!(range_f64("price", 100.01, 1.0, 100.0).is_err());
    }

    #[test]
    fn test_range_f64_bounds_inclusive() {
        assert!(range_f64("price", 1.0, 1.0, 100.0).is_ok());
        assert!(range_f64("price", 100.0, 1.0, 100.0).is_ok());
    }

    // === range_i64() ===

    #[test]
    fn test_range_i64_within_returns_ok() {
        assert!(range_i64("preparation_time", 30, 1, 120).is_ok());
    }

    #[test]
    fn test_range_i64_outside_returns_error() {
        assert!(range_i64("preparation_time", 0, 1, 120).is_err());
        assert!(range_i64("preparation_time", 121, 1, 120).is_err());
    }

    // === positive_i64() ===

    #[test]
    fn test_positive_i64_zero_returns_error() {
        assert!(positive_i64("calories", 0).is_err());
    }

    #[test]
    fn test_positive_i64_negative_returns_error() {
        assert!(positive_i64("calories", -10).is_err());
    }

    #[test]
    fn test_positive_i64_positive_returns_ok() {
        assert!(positive_i64("calories", 250).is_ok());
    }

    // === at_least_one() ===

    #[test]
    fn test_at_least_one_empty_returns_error() {
        let items: Vec<String> = vec![];
        assert!(at_least_one("ingredients", &items).is_err());
    }

    #[test]
    fn test_at_least_one_single_entry_returns_ok() {
        assert!(at_least_one("ingredients", &["flour".to_string()]).is_ok());
    }
}
