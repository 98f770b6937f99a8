//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::*;

/// Validate that a conversion rate is positive
pub fn validate_rate(rate: &BigDecimal) -> VerifierResult<()> {
    if *rate <= BigDecimal::from(0) {
        Err(VerifierError::InvalidRate(format!(
            "Rate must be positive, got {}",
            rate
        )))
    } else {
        Ok(())
    }
}

/// Validate that progress is reported at a usable interval
pub fn validate_progress_interval(interval: usize) -> VerifierResult<()> {
    if interval == 0 {
        return Err(VerifierError::InvalidConfig(
            "Progress interval must be at least one row".to_string(),
        ));
    }
    Ok(())
}

/// Validate that at least one column was selected for verification
pub fn validate_column_selection<S: AsRef<str>>(columns: &[S]) -> VerifierResult<()> {
    if columns.iter().all(|c| c.as_ref().trim().is_empty()) {
        return Err(VerifierError::NoColumnsSelected);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(&BigDecimal::from(1)).is_ok());
        assert!(matches!(
            validate_rate(&BigDecimal::from(0)),
            Err(VerifierError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_validate_column_selection() {
        assert!(validate_column_selection(&["Price"]).is_ok());
        assert!(validate_column_selection(&["", "Price"]).is_ok());

        let empty: [&str; 0] = [];
        assert!(matches!(
            validate_column_selection(&empty),
            Err(VerifierError::NoColumnsSelected)
        ));
        assert!(validate_column_selection(&["  "]).is_err());
    }
}
