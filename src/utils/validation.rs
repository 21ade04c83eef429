use crate::utils::error::{PatternError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_multiple_of(field_name: &str, value: u32, unit: u32) -> Result<()> {
    if unit == 0 {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: unit.to_string(),
            reason: "Unit cannot be zero".to_string(),
        });
    }

    if value % unit != 0 {
        return Err(PatternError::InvalidAmountError {
            amount: value,
            unit,
        });
    }

    Ok(())
}

pub fn validate_strictly_descending(field_name: &str, values: &[u32]) -> Result<()> {
    if values.is_empty() {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one value is required".to_string(),
        });
    }

    for window in values.windows(2) {
        if window[1] >= window[0] {
            return Err(PatternError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{:?}", values),
                reason: "Values must be strictly descending".to_string(),
            });
        }
    }

    if let Some(&zero) = values.iter().find(|&&v| v == 0) {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: zero.to_string(),
            reason: "Values must be positive".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
