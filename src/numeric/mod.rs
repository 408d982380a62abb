// ============================================================================
// Numeric Module
// Error types and invariant-culture number parsing
// ============================================================================
//
// This module provides:
// - ArithmeticError: Error kinds shared by every operation
// - parse_invariant: Text-to-f64 conversion used by the text operations
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Parsing is locale-independent ('.' is always the decimal separator)
// - Both operands of a binary text operation must parse

mod errors;
mod parse;

pub use errors::{ArithmeticError, ArithmeticResult, DomainViolation, ErrorKind};
pub use parse::{parse_invariant, parse_pair};
