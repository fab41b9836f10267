//! Field-level validation helpers for request DTOs.

use validator::{ValidationError, ValidationErrors};

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Names of the offending fields, sorted for stable messages.
pub fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Sensor-A").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
    }
}
