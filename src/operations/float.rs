// ============================================================================
// Float Operations
// f64 overloads, including the iterative power and square root algorithms
// ============================================================================

use crate::numeric::{ArithmeticError, ArithmeticResult, DomainViolation};

/// Absolute tolerance between successive square root guesses.
pub const SQRT_TOLERANCE: f64 = 1e-7;

/// Number of refinement steps used for a fractional exponent remainder.
pub const FRACTIONAL_POWER_ITERATIONS: u32 = 10;

/// Sum of two floats.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of two floats.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient `a / b`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero (either sign).
#[inline]
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        tracing::debug!(dividend = a, "float division by zero");
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `base` to `exponent`.
///
/// The whole part of the exponent is applied by repeated multiplication.
/// A fractional remainder `f` is approximated by the product over
/// `i in 0..10` of `base * f / (i + 1) + (1 - f)`. This is not `powf`:
/// `power(2.0, 1.5)` is `0.12890625`.
///
/// # Errors
/// Returns `InvalidOperation` for a zero base with a negative exponent.
pub fn power(base: f64, exponent: f64) -> ArithmeticResult<f64> {
    power_with(base, exponent, FRACTIONAL_POWER_ITERATIONS)
}

/// [`power`] with an explicit number of fractional refinement steps.
pub(crate) fn power_with(base: f64, exponent: f64, iterations: u32) -> ArithmeticResult<f64> {
    // Checked first: 0^0 is 1
    if exponent == 0.0 {
        return Ok(1.0);
    }
    if base == 0.0 && exponent < 0.0 {
        tracing::debug!(exponent, "zero raised to a negative power");
        return Err(DomainViolation::ZeroToNegativePower.into());
    }

    let is_negative = exponent < 0.0;
    let exponent = if is_negative { -exponent } else { exponent };

    // Truncates toward zero, saturating at i32::MAX
    let int_part = exponent as i32;
    let frac_part = exponent - f64::from(int_part);

    let mut result = 1.0;
    for _ in 0..int_part {
        result *= base;
    }

    if frac_part != 0.0 {
        let mut approx = 1.0;
        for i in 0..iterations {
            approx *= (base * frac_part / f64::from(i + 1)) + (1.0 - frac_part);
        }
        result *= approx;
    }

    Ok(if is_negative { 1.0 / result } else { result })
}

/// Non-negative square root by Newton-Raphson refinement.
///
/// Starts from `number / 2` and averages the guess with `number / guess`
/// until two successive guesses are closer than [`SQRT_TOLERANCE`].
///
/// # Errors
/// Returns `InvalidOperation` if `number` is negative.
pub fn square_root(number: f64) -> ArithmeticResult<f64> {
    square_root_with(number, SQRT_TOLERANCE)
}

/// [`square_root`] with an explicit convergence tolerance.
pub(crate) fn square_root_with(number: f64, tolerance: f64) -> ArithmeticResult<f64> {
    if number < 0.0 {
        tracing::debug!(number, "square root of a negative number");
        return Err(DomainViolation::NegativeSquareRoot.into());
    }
    if number == 0.0 {
        return Ok(0.0);
    }
    if number.is_nan() || number.is_infinite() {
        return Ok(number);
    }

    let mut guess = number / 2.0;
    if guess == 0.0 {
        // Halving the smallest subnormal rounds to zero
        guess = number;
    }

    let mut iterations: u32 = 0;
    loop {
        let next = (guess + number / guess) / 2.0;
        iterations += 1;

        let delta = guess - next;
        if delta < tolerance && delta > -tolerance {
            tracing::trace!(number, iterations, "square root converged");
            return Ok(next);
        }

        // From the second step on the guesses only decrease; a step that
        // does not decrease means float resolution is coarser than the
        // tolerance at this magnitude.
        if iterations > 1 && next >= guess {
            tracing::trace!(number, iterations, "square root stalled");
            return Ok(guess);
        }

        guess = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(2.5, 2.5), 5.0);
        assert_eq!(subtract(3.5, 2.5), 1.0);
        assert_eq!(multiply(2.5, 2.5), 6.25);
        assert_eq!(divide(5.0, 2.5), Ok(2.0));
    }

    #[test]
    fn test_ieee_rounding() {
        assert_eq!(add(0.1, 0.2), 0.30000000000000004);
        assert_eq!(add(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(5.0, -0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_power_integer_exponent() {
        assert_eq!(power(2.0, 3.0), Ok(8.0));
        assert_eq!(power(-3.0, 3.0), Ok(-27.0));
        assert_eq!(power(1.5, 2.0), Ok(2.25));
    }

    #[test]
    fn test_power_zero_exponent() {
        assert_eq!(power(0.0, 0.0), Ok(1.0));
        assert_eq!(power(123.456, 0.0), Ok(1.0));
        assert_eq!(power(-7.0, -0.0), Ok(1.0));
    }

    #[test]
    fn test_power_zero_base_negative_exponent() {
        assert_eq!(
            power(0.0, -2.0),
            Err(ArithmeticError::InvalidOperation(
                DomainViolation::ZeroToNegativePower
            ))
        );
        assert_eq!(
            power(0.0, -0.5),
            Err(ArithmeticError::InvalidOperation(
                DomainViolation::ZeroToNegativePower
            ))
        );
    }

    #[test]
    fn test_power_zero_base_positive_exponent() {
        assert_eq!(power(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_power_negative_exponent_inverts() {
        assert_eq!(power(2.0, -1.0), Ok(0.5));
        assert_eq!(power(4.0, -2.0), Ok(0.0625));
    }

    #[test]
    fn test_power_fractional_approximation() {
        // 2^1 * prod(2 * 0.5 / (i + 1) + 0.5)
        assert_eq!(power(2.0, 1.5), Ok(0.12890625));
        // Zero base leaves only (1 - f)^10
        assert_eq!(power(0.0, 0.5), Ok(0.0009765625));

        let approx = power(4.0, 0.5).unwrap();
        assert!((approx - 0.9775390624999997).abs() < 1e-15);

        let inverted = power(9.0, -0.5).unwrap();
        assert!((inverted - 0.011084890341856288).abs() < 1e-15);
    }

    #[test]
    fn test_power_fractional_iteration_count() {
        // Each step multiplies by (1 - f) when the base is zero
        assert_eq!(power_with(0.0, 0.5, 1), Ok(0.5));
        assert_eq!(power_with(0.0, 0.5, 3), Ok(0.125));
        assert_eq!(power_with(2.0, 0.5, 0), Ok(1.0));
    }

    #[test]
    fn test_power_nan_propagates() {
        assert!(power(2.0, f64::NAN).unwrap().is_nan());
        assert!(power(f64::NAN, 2.0).unwrap().is_nan());
    }

    #[test]
    fn test_square_root_exact_cases() {
        assert_eq!(square_root(4.0), Ok(2.0));
        assert_eq!(square_root(1e10), Ok(100000.0));
    }

    #[test]
    fn test_square_root_approximate() {
        assert_eq!(square_root(2.0), Ok(1.414213562373095));
        let quarter = square_root(0.25).unwrap();
        assert!((quarter - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_square_root_absolute_tolerance() {
        // Absolute tolerance stops well before full precision for tiny inputs
        let tiny = square_root(1e-20).unwrap();
        assert!((tiny - 5.960470069943345e-08).abs() < 1e-20);
    }

    #[test]
    fn test_square_root_zero() {
        let root = square_root(0.0).unwrap();
        assert_eq!(root, 0.0);
        assert!(root.is_sign_positive());
        assert_eq!(square_root(-0.0), Ok(0.0));
    }

    #[test]
    fn test_square_root_negative() {
        assert_eq!(
            square_root(-1.0),
            Err(ArithmeticError::InvalidOperation(
                DomainViolation::NegativeSquareRoot
            ))
        );
        assert!(square_root(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_square_root_terminates_at_extremes() {
        let large = square_root(1e300).unwrap();
        assert!((large - 1e150).abs() / 1e150 < 1e-12);

        let max = square_root(f64::MAX).unwrap();
        assert!((max - f64::MAX.sqrt()).abs() / max < 1e-12);

        let smallest = square_root(f64::from_bits(1)).unwrap();
        assert!(smallest.is_finite());
        assert!(smallest < 1e-6);

        assert_eq!(square_root(f64::INFINITY), Ok(f64::INFINITY));
        assert!(square_root(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_square_root_custom_tolerance() {
        let coarse = square_root_with(2.0, 0.5).unwrap();
        let fine = square_root_with(2.0, SQRT_TOLERANCE).unwrap();
        assert!((coarse - fine).abs() > 1e-6);
        assert!((coarse - fine).abs() < 0.5);
    }
}
