use thiserror::Error;

use crate::config::DepositLimits;
use crate::format::format_limit;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepositError {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Deposit amount must be at least {}", format_limit(.min))]
    BelowMinimum { min: f64 },
    #[error("Deposit amount cannot exceed {}", format_limit(.max))]
    AboveMaximum { max: f64 },
}

/// Parses free-text deposit input and checks it against the inclusive range.
pub fn validate_deposit(input: &str, limits: &DepositLimits) -> Result<f64, DepositError> {
    let amount = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(DepositError::NotANumber)?;

    if amount < limits.min {
        return Err(DepositError::BelowMinimum { min: limits.min });
    }
    if amount > limits.max {
        return Err(DepositError::AboveMaximum { max: limits.max });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> DepositLimits {
        DepositLimits::default()
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(validate_deposit("20000", &limits()), Ok(20_000.0));
        assert_eq!(validate_deposit("50000", &limits()), Ok(50_000.0));
        assert_eq!(validate_deposit("35000.75", &limits()), Ok(35_000.75));
    }

    #[test]
    fn just_outside_the_range() {
        assert_eq!(
            validate_deposit("19999.99", &limits()),
            Err(DepositError::BelowMinimum { min: 20_000.0 })
        );
        assert_eq!(
            validate_deposit("50000.01", &limits()),
            Err(DepositError::AboveMaximum { max: 50_000.0 })
        );
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["abc", "", "   ", "30,000", "NaN", "inf", "-infinity", "12abc"] {
            assert_eq!(
                validate_deposit(input, &limits()),
                Err(DepositError::NotANumber),
                "{input:?}"
            );
        }
    }

    #[test]
    fn accepts_surrounding_whitespace_and_exponents() {
        assert_eq!(validate_deposit(" 25000 ", &limits()), Ok(25_000.0));
        assert_eq!(validate_deposit("3e4", &limits()), Ok(30_000.0));
    }

    #[test]
    fn messages() {
        assert_eq!(
            DepositError::NotANumber.to_string(),
            "Please enter a valid number"
        );
        assert_eq!(
            validate_deposit("100", &limits()).unwrap_err().to_string(),
            "Deposit amount must be at least 20,000"
        );
        assert_eq!(
            validate_deposit("60000", &limits()).unwrap_err().to_string(),
            "Deposit amount cannot exceed 50,000"
        );
    }

    #[test]
    fn custom_limits() {
        let limits = DepositLimits {
            min: 1_000.0,
            max: 2_500.5,
        };
        assert_eq!(validate_deposit("1000", &limits), Ok(1_000.0));
        assert_eq!(
            validate_deposit("2600", &limits).unwrap_err().to_string(),
            "Deposit amount cannot exceed 2,500.50"
        );
    }
}
