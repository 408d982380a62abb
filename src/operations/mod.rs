// ============================================================================
// Operations Module
// The six elementary operations for float, integer and text operands
// ============================================================================
//
// Each operand representation has its own module of plain functions:
// - float:   f64 -> f64 (power and square root are the iterative algorithms)
// - integer: i32 -> i32 with wraparound (square root returns f64)
// - text:    &str -> f64, parsing in invariant format first
//
// The `Arithmetic` trait ties the three together so callers can use the
// generic `add`, `subtract`, ... entry points and let the operand type pick
// the implementation.

pub mod float;
pub mod integer;
pub mod text;

use crate::numeric::ArithmeticResult;

/// An operand representation that supports the six elementary operations.
///
/// Both operands of a binary operation share one representation; the
/// associated `Output` is the representation of the result.
pub trait Arithmetic: Copy {
    /// Result type of the binary operations
    type Output;

    fn add(self, rhs: Self) -> ArithmeticResult<Self::Output>;

    fn subtract(self, rhs: Self) -> ArithmeticResult<Self::Output>;

    fn multiply(self, rhs: Self) -> ArithmeticResult<Self::Output>;

    /// Fails with `DivisionByZero` when `rhs` is zero.
    fn divide(self, rhs: Self) -> ArithmeticResult<Self::Output>;

    /// Fails with `InvalidOperation` for a zero base and negative exponent.
    fn power(self, exponent: Self) -> ArithmeticResult<Self::Output>;

    /// Square root, always computed in floating point.
    fn square_root(self) -> ArithmeticResult<f64>;
}

impl Arithmetic for f64 {
    type Output = f64;

    #[inline]
    fn add(self, rhs: Self) -> ArithmeticResult<f64> {
        Ok(float::add(self, rhs))
    }

    #[inline]
    fn subtract(self, rhs: Self) -> ArithmeticResult<f64> {
        Ok(float::subtract(self, rhs))
    }

    #[inline]
    fn multiply(self, rhs: Self) -> ArithmeticResult<f64> {
        Ok(float::multiply(self, rhs))
    }

    #[inline]
    fn divide(self, rhs: Self) -> ArithmeticResult<f64> {
        float::divide(self, rhs)
    }

    #[inline]
    fn power(self, exponent: Self) -> ArithmeticResult<f64> {
        float::power(self, exponent)
    }

    #[inline]
    fn square_root(self) -> ArithmeticResult<f64> {
        float::square_root(self)
    }
}

impl Arithmetic for i32 {
    type Output = i32;

    #[inline]
    fn add(self, rhs: Self) -> ArithmeticResult<i32> {
        Ok(integer::add(self, rhs))
    }

    #[inline]
    fn subtract(self, rhs: Self) -> ArithmeticResult<i32> {
        Ok(integer::subtract(self, rhs))
    }

    #[inline]
    fn multiply(self, rhs: Self) -> ArithmeticResult<i32> {
        Ok(integer::multiply(self, rhs))
    }

    #[inline]
    fn divide(self, rhs: Self) -> ArithmeticResult<i32> {
        integer::divide(self, rhs)
    }

    #[inline]
    fn power(self, exponent: Self) -> ArithmeticResult<i32> {
        integer::power(self, exponent)
    }

    #[inline]
    fn square_root(self) -> ArithmeticResult<f64> {
        integer::square_root(self)
    }
}

impl Arithmetic for &str {
    type Output = f64;

    fn add(self, rhs: Self) -> ArithmeticResult<f64> {
        text::add(self, rhs)
    }

    fn subtract(self, rhs: Self) -> ArithmeticResult<f64> {
        text::subtract(self, rhs)
    }

    fn multiply(self, rhs: Self) -> ArithmeticResult<f64> {
        text::multiply(self, rhs)
    }

    fn divide(self, rhs: Self) -> ArithmeticResult<f64> {
        text::divide(self, rhs)
    }

    fn power(self, exponent: Self) -> ArithmeticResult<f64> {
        text::power(self, exponent)
    }

    fn square_root(self) -> ArithmeticResult<f64> {
        text::square_root(self)
    }
}

// ============================================================================
// Generic Entry Points
// ============================================================================

/// `a + b` for any [`Arithmetic`] operand.
#[inline]
pub fn add<T: Arithmetic>(a: T, b: T) -> ArithmeticResult<T::Output> {
    a.add(b)
}

/// `a - b` for any [`Arithmetic`] operand.
#[inline]
pub fn subtract<T: Arithmetic>(a: T, b: T) -> ArithmeticResult<T::Output> {
    a.subtract(b)
}

/// `a * b` for any [`Arithmetic`] operand.
#[inline]
pub fn multiply<T: Arithmetic>(a: T, b: T) -> ArithmeticResult<T::Output> {
    a.multiply(b)
}

/// `a / b` for any [`Arithmetic`] operand.
#[inline]
pub fn divide<T: Arithmetic>(a: T, b: T) -> ArithmeticResult<T::Output> {
    a.divide(b)
}

/// `base ^ exponent` for any [`Arithmetic`] operand.
#[inline]
pub fn power<T: Arithmetic>(base: T, exponent: T) -> ArithmeticResult<T::Output> {
    base.power(exponent)
}

/// Square root of any [`Arithmetic`] operand.
#[inline]
pub fn square_root<T: Arithmetic>(number: T) -> ArithmeticResult<f64> {
    number.square_root()
}
