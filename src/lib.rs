// ============================================================================
// Math Operations Library
// Elementary arithmetic over floats, integers and invariant numeric text
// ============================================================================

//! # Math Operations
//!
//! Six scalar operations (add, subtract, multiply, divide, power, square
//! root), each available for `f64`, `i32` and numeric text.
//!
//! ## Features
//!
//! - **Three operand representations** with a per-type module each
//!   ([`float`], [`integer`], [`text`]) and generic entry points that pick
//!   the implementation from the operand type
//! - **Invariant decimal parsing**: `.` is always the decimal separator,
//!   optional sign and exponent
//! - **Explicit errors**: every fallible operation returns
//!   [`ArithmeticResult`]
//! - **Runtime dispatch** through [`Calculator`] for operands whose type is
//!   only known at runtime
//!
//! Power and square root are iterative: integer exponents by repeated
//! multiplication with a fixed 10-step approximation for a fractional
//! remainder, square roots by Newton-Raphson refinement to an absolute
//! tolerance of `1e-7`.
//!
//! ## Example
//!
//! ```rust
//! use math_operations::prelude::*;
//!
//! assert_eq!(add(2.5, 2.5), Ok(5.0));
//! assert_eq!(add(2, 3), Ok(5));
//! assert_eq!(add("2.5", "2.5"), Ok(5.0));
//! assert_eq!(add("invalid", "2.5"), Err(ArithmeticError::Format));
//!
//! assert_eq!(divide(6, 3), Ok(2));
//! assert_eq!(divide(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
//!
//! assert_eq!(power(2.0, -1.0), Ok(0.5));
//! assert!((square_root(4).unwrap() - 2.0).abs() < 0.0001);
//! ```

pub mod calculator;
pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod operations;

pub use calculator::{BinaryOperation, Calculator, Operand, Value};
pub use config::{ArithmeticConfig, ConfigError};
pub use numeric::{ArithmeticError, ArithmeticResult, DomainViolation, ErrorKind};
pub use operations::{
    add, divide, float, integer, multiply, power, square_root, subtract, text, Arithmetic,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{BinaryOperation, Calculator, Operand, Value};
    pub use crate::config::ArithmeticConfig;
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, DomainViolation, ErrorKind};
    pub use crate::operations::{
        add, divide, multiply, power, square_root, subtract, Arithmetic,
    };
}
