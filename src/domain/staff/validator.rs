//! Validation rules shared by every employee role.
//!
//! These are pure functions: they inspect raw input and either hand back a
//! normalized value or a [`ValidationError`]. Role-specific checks (bonus,
//! level, commission) live with the strategy that owns those fields.

use crate::domain::foundation::{EmployeeId, ValidationError};

/// Validates the identity fields common to all employees.
///
/// # Errors
///
/// - `InvalidId` when `id <= 0`
/// - `EmptyName` when `name` is empty or only whitespace
/// - `NegativeSalary` when `salary < 0` (or not a finite number)
pub fn validate(id: i64, name: &str, salary: f64) -> Result<(), ValidationError> {
    validate_id(id)?;
    validate_name("name", name)?;
    validate_amount("base_salary", salary)?;
    Ok(())
}

/// Validates an employee id.
pub fn validate_id(id: i64) -> Result<EmployeeId, ValidationError> {
    EmployeeId::new(id)
}

/// Validates a required text field and returns it trimmed.
pub fn validate_name(field: &str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_name(field));
    }
    Ok(trimmed.to_string())
}

/// Validates a monetary amount that must be zero or more.
pub fn validate_amount(field: &str, amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::negative_salary(field, amount));
    }
    Ok(amount)
}

/// Returns true when `amount` is a finite, non-negative number.
pub(crate) fn is_non_negative(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_legal_input() {
        assert!(validate(1, "Alice", 0.0).is_ok());
        assert!(validate(42, "Bob", 5000.0).is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_id() {
        assert!(matches!(
            validate(0, "Alice", 100.0),
            Err(ValidationError::InvalidId { .. })
        ));
        assert!(matches!(
            validate(-1, "Alice", 100.0),
            Err(ValidationError::InvalidId { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(matches!(
            validate(1, "", 100.0),
            Err(ValidationError::EmptyName { .. })
        ));
        assert!(matches!(
            validate(1, "   \t", 100.0),
            Err(ValidationError::EmptyName { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_salary() {
        assert!(matches!(
            validate(1, "Alice", -0.01),
            Err(ValidationError::NegativeSalary { .. })
        ));
    }

    #[test]
    fn validate_checks_id_before_name() {
        assert!(matches!(
            validate(0, "", -1.0),
            Err(ValidationError::InvalidId { .. })
        ));
    }

    #[test]
    fn validate_amount_rejects_nan_and_infinity() {
        assert!(validate_amount("base_salary", f64::NAN).is_err());
        assert!(validate_amount("base_salary", f64::INFINITY).is_err());
    }

    #[test]
    fn validate_name_trims_whitespace() {
        assert_eq!(validate_name("name", "  Alice ").unwrap(), "Alice");
    }
}
