//! services/lab/src/console/forms.rs
//!
//! Helpers turning raw form text into the pre-validated values the
//! repositories expect.

use physics_lab_core::validation::is_numeric_string;

use crate::error::{LabError, LabResult};

/// Trims every field and fails on the first blank one.
pub(crate) fn require_filled<'a, const N: usize>(
    fields: [(&str, &'a str); N],
) -> LabResult<[&'a str; N]> {
    let mut trimmed = [""; N];
    for (slot, (label, raw)) in trimmed.iter_mut().zip(fields) {
        let value = raw.trim();
        if value.is_empty() {
            return Err(LabError::Validation(format!("Please fill in the {label} field.")));
        }
        *slot = value;
    }
    Ok(trimmed)
}

/// Parses a trimmed, non-blank field that must be an unsigned decimal.
pub(crate) fn numeric(label: &str, value: &str) -> LabResult<f64> {
    if !is_numeric_string(value) {
        return Err(LabError::Validation(format!(
            "The {label} field only accepts numeric values."
        )));
    }
    value
        .parse::<f64>()
        .map_err(|e| LabError::Validation(format!("The {label} field is not a number: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed_in_order() {
        let [a, b] = require_filled([("charge", " 2 "), ("distance", "3\t")]).unwrap();
        assert_eq!((a, b), ("2", "3"));
    }

    #[test]
    fn first_blank_field_is_named() {
        let err = require_filled([("charge", "2"), ("distance", "  "), ("angle", "")]).unwrap_err();
        assert!(err.to_string().contains("distance"));
    }

    #[test]
    fn numeric_rejects_signs_and_exponents() {
        assert_eq!(numeric("power", "12.5").unwrap(), 12.5);
        assert!(matches!(numeric("power", "-3"), Err(LabError::Validation(_))));
        assert!(matches!(numeric("power", "1e3"), Err(LabError::Validation(_))));
    }
}
