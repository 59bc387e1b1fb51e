use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_control_chars(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_control) {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value contains control characters".to_string(),
        });
    }
    Ok(())
}
