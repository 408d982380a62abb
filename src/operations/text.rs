// ============================================================================
// Text Operations
// Parse invariant decimal operands, then evaluate in floating point
// ============================================================================

use super::float;
use crate::numeric::{parse_invariant, parse_pair, ArithmeticResult};

/// Sum of two numeric tokens.
///
/// # Errors
/// Returns `Format` if either token is not a number.
pub fn add(a: &str, b: &str) -> ArithmeticResult<f64> {
    let (a, b) = parse_pair(a, b)?;
    Ok(float::add(a, b))
}

/// Difference of two numeric tokens.
///
/// # Errors
/// Returns `Format` if either token is not a number.
pub fn subtract(a: &str, b: &str) -> ArithmeticResult<f64> {
    let (a, b) = parse_pair(a, b)?;
    Ok(float::subtract(a, b))
}

/// Product of two numeric tokens.
///
/// # Errors
/// Returns `Format` if either token is not a number.
pub fn multiply(a: &str, b: &str) -> ArithmeticResult<f64> {
    let (a, b) = parse_pair(a, b)?;
    Ok(float::multiply(a, b))
}

/// Quotient of two numeric tokens.
///
/// Parsing happens before the zero check, so a malformed divisor is a
/// `Format` error even when it resembles zero.
///
/// # Errors
/// - `Format` if either token is not a number
/// - `DivisionByZero` if the parsed divisor is zero
pub fn divide(a: &str, b: &str) -> ArithmeticResult<f64> {
    let (a, b) = parse_pair(a, b)?;
    float::divide(a, b)
}

/// Power of two numeric tokens, see [`float::power`].
///
/// # Errors
/// - `Format` if either token is not a number
/// - `InvalidOperation` for a zero base with a negative exponent
pub fn power(base: &str, exponent: &str) -> ArithmeticResult<f64> {
    let (base, exponent) = parse_pair(base, exponent)?;
    float::power(base, exponent)
}

/// Square root of a numeric token, see [`float::square_root`].
///
/// # Errors
/// - `Format` if the token is not a number
/// - `InvalidOperation` if the parsed value is negative
pub fn square_root(number: &str) -> ArithmeticResult<f64> {
    float::square_root(parse_invariant(number)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ArithmeticError, DomainViolation, ErrorKind};

    #[test]
    fn test_valid_tokens() {
        assert_eq!(add("2.5", "2.5"), Ok(5.0));
        assert_eq!(subtract("3.5", "2.5"), Ok(1.0));
        assert_eq!(multiply("2.5", "2.5"), Ok(6.25));
        assert_eq!(divide("5.0", "2.5"), Ok(2.0));
        assert_eq!(power("2.0", "3.0"), Ok(8.0));

        let root = square_root("4.0").unwrap();
        assert!((root - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(add("invalid", "2.5"), Err(ArithmeticError::Format));
        assert_eq!(subtract("invalid", "2.5"), Err(ArithmeticError::Format));
        assert_eq!(multiply("2.5", "invalid"), Err(ArithmeticError::Format));
        assert_eq!(divide("invalid", "2.5"), Err(ArithmeticError::Format));
        assert_eq!(power("invalid", "3.0"), Err(ArithmeticError::Format));
        assert_eq!(square_root("invalid"), Err(ArithmeticError::Format));
    }

    #[test]
    fn test_divide_parse_error_before_zero_check() {
        assert_eq!(divide("1", "0,0"), Err(ArithmeticError::Format));
        assert_eq!(divide("1", "zero"), Err(ArithmeticError::Format));
        assert_eq!(divide("1", "0"), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide("1", "-0.0"), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide("x", "0"), Err(ArithmeticError::Format));
    }

    #[test]
    fn test_power_domain_error() {
        assert_eq!(power("5", "0"), Ok(1.0));
        assert_eq!(power("0", "0"), Ok(1.0));
        assert_eq!(
            power("0", "-1"),
            Err(ArithmeticError::InvalidOperation(
                DomainViolation::ZeroToNegativePower
            ))
        );
        assert_eq!(power("2", "-1"), Ok(0.5));
    }

    #[test]
    fn test_square_root_error_kinds_are_distinct() {
        let negative = square_root("-1").unwrap_err();
        let garbage = square_root("abc").unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::InvalidOperation);
        assert_eq!(garbage.kind(), ErrorKind::Format);
        assert_ne!(negative.kind(), garbage.kind());
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(add("1e2", "2.5E1"), Ok(125.0));
        assert_eq!(multiply("-1.5e-1", "2"), Ok(-0.3));
    }
}
