// ============================================================================
// Invariant Decimal Parsing
// Locale-independent conversion of numeric text to f64
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};

/// Parse a text token written in invariant decimal format.
///
/// Accepted shape, after trimming surrounding whitespace:
/// `[+|-] digits [. [digits]] [(e|E) [+|-] digits]`, or a mantissa that
/// starts at the decimal point (`.5`). The period is always the decimal
/// separator; no grouping characters are allowed.
///
/// # Examples
/// - `"2.5"` -> 2.5
/// - `"-0.001"` -> -0.001
/// - `"+1.5e3"` -> 1500.0
/// - `"5."` -> 5.0
///
/// # Errors
/// Returns `Format` for empty, non-numeric or malformed tokens.
pub fn parse_invariant(token: &str) -> ArithmeticResult<f64> {
    let s = token.trim();
    if !is_invariant_literal(s.as_bytes()) {
        tracing::debug!(token, "rejected numeric token");
        return Err(ArithmeticError::Format);
    }

    // The grammar check above is stricter than the std float parser, so
    // anything that got here is a literal it rounds correctly.
    s.parse::<f64>().map_err(|_| ArithmeticError::Format)
}

/// Parse both operands of a binary text operation.
///
/// Either failure fails the pair; the left operand is parsed first.
#[inline]
pub fn parse_pair(lhs: &str, rhs: &str) -> ArithmeticResult<(f64, f64)> {
    Ok((parse_invariant(lhs)?, parse_invariant(rhs)?))
}

fn is_invariant_literal(bytes: &[u8]) -> bool {
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    // Mantissa needs at least one digit on either side of the point
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
