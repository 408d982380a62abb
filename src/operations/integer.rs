// ============================================================================
// Integer Operations
// i32 overloads with two's complement wraparound
// ============================================================================

use super::float;
use crate::numeric::{ArithmeticError, ArithmeticResult, DomainViolation};

/// Sum of two integers, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Difference `a - b`, wrapping on overflow.
#[inline]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Product of two integers, wrapping on overflow.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Quotient `a / b`, truncated toward zero.
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
#[inline]
pub fn divide(a: i32, b: i32) -> ArithmeticResult<i32> {
    if b == 0 {
        tracing::debug!(dividend = a, "integer division by zero");
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// Raise `base` to `exponent` with wrapping multiplication.
///
/// A negative exponent takes the reciprocal of the positive power as an
/// `f64` and truncates it back to `i32`, so the result is 0 for any
/// `|base| > 1` and ±1 for `base == ±1`.
///
/// # Errors
/// Returns `InvalidOperation` for a zero base with a negative exponent.
pub fn power(base: i32, exponent: i32) -> ArithmeticResult<i32> {
    if exponent == 0 {
        return Ok(1);
    }
    if base == 0 && exponent < 0 {
        tracing::debug!(exponent, "zero raised to a negative power");
        return Err(DomainViolation::ZeroToNegativePower.into());
    }

    // Wrapping exponentiation equals repeated wrapping multiplication
    let result = base.wrapping_pow(exponent.unsigned_abs());

    if exponent < 0 {
        let reciprocal = 1.0 / f64::from(result);
        // Saturating truncation; a wrapped-to-zero power gives +inf -> i32::MAX
        return Ok(reciprocal as i32);
    }

    Ok(result)
}

/// Square root of an integer, computed in floating point.
///
/// # Errors
/// Returns `InvalidOperation` if `number` is negative.
#[inline]
pub fn square_root(number: i32) -> ArithmeticResult<f64> {
    float::square_root(f64::from(number))
}
