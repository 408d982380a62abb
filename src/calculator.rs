// ============================================================================
// Calculator
// Tagged-union dispatch over float, integer and text operands
// ============================================================================

use crate::config::{ArithmeticConfig, ConfigError};
use crate::numeric::{parse_invariant, ArithmeticResult};
use crate::operations::{float, integer};
use std::fmt;

/// An operand whose representation is chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Float(f64),
    Integer(i32),
    /// Number in invariant decimal format, parsed on use
    Text(String),
}

impl Operand {
    /// Resolve the operand to a float, parsing text.
    ///
    /// # Errors
    /// Returns `Format` if a text operand is not a number.
    pub fn to_f64(&self) -> ArithmeticResult<f64> {
        match self {
            Operand::Float(value) => Ok(*value),
            Operand::Integer(value) => Ok(f64::from(*value)),
            Operand::Text(token) => parse_invariant(token),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(value)
    }
}

impl From<&str> for Operand {
    fn from(token: &str) -> Self {
        Operand::Text(token.to_string())
    }
}

impl From<String> for Operand {
    fn from(token: String) -> Self {
        Operand::Text(token)
    }
}

/// Result of a calculator operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i32),
}

impl Value {
    /// The value as a float (integers convert exactly).
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Float(value) => value,
            Value::Integer(value) => f64::from(value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// The binary operations a [`Calculator`] can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOperation::Add => "add",
            BinaryOperation::Subtract => "subtract",
            BinaryOperation::Multiply => "multiply",
            BinaryOperation::Divide => "divide",
            BinaryOperation::Power => "power",
        };
        f.write_str(name)
    }
}

/// Evaluates operations over [`Operand`]s with a given [`ArithmeticConfig`].
///
/// Two integer operands use the integer implementation and produce
/// [`Value::Integer`]. Any other combination resolves both operands to
/// floats (left first, so a bad left token is reported first) and produces
/// [`Value::Float`].
///
/// # Example
/// ```rust
/// use math_operations::{BinaryOperation, Calculator, Operand, Value};
///
/// let calc = Calculator::new();
/// let sum = calc.apply(BinaryOperation::Add, &Operand::Integer(2), &Operand::Integer(3));
/// assert_eq!(sum, Ok(Value::Integer(5)));
///
/// let mixed = calc.apply(BinaryOperation::Multiply, &"2.5".into(), &Operand::Integer(2));
/// assert_eq!(mixed, Ok(Value::Float(5.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: ArithmeticConfig,
}

impl Calculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a validated custom configuration
    pub fn with_config(config: ArithmeticConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Apply a binary operation.
    ///
    /// # Errors
    /// - `Format` if a text operand is not a number
    /// - `DivisionByZero` for a zero divisor
    /// - `InvalidOperation` for a zero base with a negative exponent
    pub fn apply(
        &self,
        operation: BinaryOperation,
        lhs: &Operand,
        rhs: &Operand,
    ) -> ArithmeticResult<Value> {
        if let (Operand::Integer(a), Operand::Integer(b)) = (lhs, rhs) {
            return self.apply_integer(operation, *a, *b).map(Value::Integer);
        }

        let a = lhs.to_f64()?;
        let b = rhs.to_f64()?;
        self.apply_float(operation, a, b).map(Value::Float)
    }

    /// Square root of an operand of any representation.
    ///
    /// # Errors
    /// - `Format` if a text operand is not a number
    /// - `InvalidOperation` if the value is negative
    pub fn square_root(&self, operand: &Operand) -> ArithmeticResult<f64> {
        float::square_root_with(operand.to_f64()?, self.config.sqrt_tolerance)
    }

    fn apply_integer(&self, operation: BinaryOperation, a: i32, b: i32) -> ArithmeticResult<i32> {
        match operation {
            BinaryOperation::Add => Ok(integer::add(a, b)),
            BinaryOperation::Subtract => Ok(integer::subtract(a, b)),
            BinaryOperation::Multiply => Ok(integer::multiply(a, b)),
            BinaryOperation::Divide => integer::divide(a, b),
            BinaryOperation::Power => integer::power(a, b),
        }
    }

    fn apply_float(&self, operation: BinaryOperation, a: f64, b: f64) -> ArithmeticResult<f64> {
        match operation {
            BinaryOperation::Add => Ok(float::add(a, b)),
            BinaryOperation::Subtract => Ok(float::subtract(a, b)),
            BinaryOperation::Multiply => Ok(float::multiply(a, b)),
            BinaryOperation::Divide => float::divide(a, b),
            BinaryOperation::Power => {
                float::power_with(a, b, self.config.fractional_power_iterations)
            },
        }
    }
}
