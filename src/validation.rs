// Validation utilities module
// Custom validator functions for domain-specific rules

use validator::ValidationError;

/// Validates that a required text field is non-empty after trimming
/// whitespace. Plain `length(min = 1)` would accept "   ".
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("must not be blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
        assert!(not_blank("buy milk").is_ok());
        assert!(not_blank("  x  ").is_ok());
    }
}
