// ============================================================================
// Arithmetic Errors
// Error types for parsing and elementary arithmetic operations
// ============================================================================

use std::fmt;

/// The mathematically undefined requests rejected as invalid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainViolation {
    /// Zero base combined with a negative exponent
    ZeroToNegativePower,
    /// Square root requested for a negative number
    NegativeSquareRoot,
}

/// Coarse classification of an [`ArithmeticError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    DivisionByZero,
    InvalidOperation,
}

/// Errors that can occur while parsing operands or evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Text operand is not a number in invariant decimal format
    Format,
    /// Divisor is exactly zero
    DivisionByZero,
    /// Operation is undefined for the given operands
    InvalidOperation(DomainViolation),
}

impl ArithmeticError {
    /// Classify the error without its detail.
    #[inline]
    pub const fn kind(self) -> ErrorKind {
        match self {
            ArithmeticError::Format => ErrorKind::Format,
            ArithmeticError::DivisionByZero => ErrorKind::DivisionByZero,
            ArithmeticError::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainViolation::ZeroToNegativePower => {
                write!(f, "zero cannot be raised to a negative power")
            },
            DomainViolation::NegativeSquareRoot => {
                write!(f, "square root of a negative number is not defined")
            },
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Format => write!(f, "invalid format: operand is not a number"),
            ArithmeticError::DivisionByZero => write!(f, "division by zero is not allowed"),
            ArithmeticError::InvalidOperation(violation) => {
                write!(f, "invalid operation: {}", violation)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

impl From<DomainViolation> for ArithmeticError {
    #[inline]
    fn from(violation: DomainViolation) -> Self {
        ArithmeticError::InvalidOperation(violation)
    }
}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
