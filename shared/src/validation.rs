use validator::ValidationError;

use crate::color::{is_hex_color, is_named_color};

pub const MAX_LABEL_LENGTH: usize = 60;
pub const MAX_ENTRIES: usize = 100;

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("empty_label"));
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(ValidationError::new("label_too_long"));
    }
    if label.chars().any(|c| c.is_control()) {
        return Err(ValidationError::new("invalid_label_characters"));
    }
    Ok(())
}

pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if is_hex_color(color) || is_named_color(color) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_color"))
}

/// Key used when comparing labels for duplicates.
pub fn label_key(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Pizza").is_ok());
        assert!(validate_label("   ").is_err());
        assert!(validate_label("").is_err());
        assert!(validate_label(&"x".repeat(MAX_LABEL_LENGTH + 1)).is_err());
        assert!(validate_label("tab\there").is_err());
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#06b6d4").is_ok());
        assert!(validate_color("rebeccapurple").is_ok());
        assert!(validate_color("Teal").is_ok());
        assert!(validate_color("zzz").is_err());
        assert!(validate_color("notacolor").is_err());
        assert!(validate_color("rgb(1,2,3)").is_err());
        assert!(validate_color("#12345").is_err());
    }

    #[test]
    fn test_label_key_ignores_case_and_padding() {
        assert_eq!(label_key("  Tacos "), label_key("tacos"));
    }
}
