//! crates/physics_lab_core/src/validation.rs
//!
//! Stateless input checks shared by every form. Callers trim input before
//! calling these; the patterns themselves tolerate no surrounding whitespace.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Unsigned integer or decimal, no exponent, no separators.
    static ref NUMERIC_REGEX: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();

    /// Local part and domain around a single '@'. No TLD requirement.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap();
}

/// True iff `input` is a non-negative integer or decimal such as `12` or `0.5`.
pub fn is_numeric_string(input: &str) -> bool {
    NUMERIC_REGEX.is_match(input)
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Upper-cases the first character and lower-cases everything after it.
///
/// The whole remainder is lower-cased, so `"ana MARIA"` becomes `"Ana maria"`.
/// Blank input is returned unchanged.
pub fn normalize_name(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
