//! Arithmetic evaluator for `operand operator operand` expressions.
//!
//! Every failure collapses into [`Evaluation::Failed`], which renders as
//! [`MATH_ERROR`]. Callers never learn why an expression was rejected.
//!
//! # Examples
//!
//! ```
//! use parley::math::{evaluate, MATH_ERROR};
//!
//! assert_eq!(evaluate("6 * 3"), "18");
//! assert_eq!(evaluate("7 / 2"), "3.5");
//! assert_eq!(evaluate("6 % 3"), MATH_ERROR);
//! ```

use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// Reply used for any expression that cannot be evaluated.
pub const MATH_ERROR: &str = "Sorry, I couldn't perform the math operation.";

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator symbol. Only `+`, `-`, `*` and `/` are accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator.
    ///
    /// Integer results are exact at any size. Division is true division and
    /// always yields a float; it fails on a zero divisor or when the quotient
    /// is not a finite `f64`.
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> Option<Number> {
        match self {
            Operator::Add => Some(Number::Integer(lhs + rhs)),
            Operator::Subtract => Some(Number::Integer(lhs - rhs)),
            Operator::Multiply => Some(Number::Integer(lhs * rhs)),
            Operator::Divide => {
                if rhs.is_zero() {
                    return None;
                }
                let quotient = lhs.to_f64()? / rhs.to_f64()?;
                quotient.is_finite().then_some(Number::Float(quotient))
            }
        }
    }
}

/// A computed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(BigInt),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) => write_float(f, *value),
        }
    }
}

/// Write a float with the shortest round-trip digits.
///
/// Decimal exponents below -4 or from 16 up use `d.ddde±XX`; everything in
/// between is positional and keeps at least one fractional digit.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return write!(f, "{value}");
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .ok_or(fmt::Error)?;

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let positional = value.to_string();
    if positional.contains('.') {
        f.write_str(&positional)
    } else {
        write!(f, "{positional}.0")
    }
}

/// Outcome of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Value(Number),
    Failed,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Value(number) => write!(f, "{number}"),
            Evaluation::Failed => f.write_str(MATH_ERROR),
        }
    }
}

/// Evaluate an expression of exactly three whitespace-separated tokens.
pub fn try_evaluate(expression: &str) -> Evaluation {
    let tokens: Vec<&str> = expression.split_whitespace().collect();
    let [lhs, symbol, rhs] = tokens.as_slice() else {
        return Evaluation::Failed;
    };

    let (Ok(lhs), Ok(rhs)) = (lhs.parse::<BigInt>(), rhs.parse::<BigInt>()) else {
        return Evaluation::Failed;
    };

    Operator::from_symbol(symbol)
        .and_then(|op| op.apply(&lhs, &rhs))
        .map_or(Evaluation::Failed, Evaluation::Value)
}

/// Evaluate an expression and render the result or [`MATH_ERROR`].
pub fn evaluate(expression: &str) -> String {
    try_evaluate(expression).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_operators() {
        assert_eq!(evaluate("6 + 3"), "9");
        assert_eq!(evaluate("6 - 3"), "3");
        assert_eq!(evaluate("6 * 3"), "18");
        assert_eq!(evaluate("6 / 3"), "2.0");
    }

    #[test]
    fn test_fractional_division() {
        assert_eq!(evaluate("7 / 2"), "3.5");
        assert_eq!(evaluate("1 / 4"), "0.25");
        assert_eq!(evaluate("-9 / 3"), "-3.0");
        assert_eq!(evaluate("0 / -5"), "-0.0");
    }

    #[test]
    fn test_division_switches_to_exponent_form() {
        assert_eq!(evaluate("1 / 100000"), "1e-05");
        assert_eq!(evaluate("1 / 10000"), "0.0001");
        assert_eq!(evaluate("3 / 20000000"), "1.5e-07");
        assert_eq!(evaluate("100000000000000000 / 1"), "1e+17");
        assert_eq!(evaluate("1000000000000000 / 1"), "1000000000000000.0");
        assert_eq!(evaluate("123456789012345678 / 1"), "1.2345678901234568e+17");
    }

    #[test]
    fn test_negative_operands_and_results() {
        assert_eq!(evaluate("-4 + 1"), "-3");
        assert_eq!(evaluate("3 - 10"), "-7");
        assert_eq!(evaluate("+5 * 2"), "10");
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        assert_eq!(evaluate("  12   *\t2 "), "24");
    }

    #[test]
    fn test_failures_share_one_message() {
        assert_eq!(evaluate("6 % 3"), MATH_ERROR);
        assert_eq!(evaluate("six + 3"), MATH_ERROR);
        assert_eq!(evaluate("6 +"), MATH_ERROR);
        assert_eq!(evaluate("6 + 3 + 1"), MATH_ERROR);
        assert_eq!(evaluate("6 / 0"), MATH_ERROR);
        assert_eq!(evaluate("1.5 + 2"), MATH_ERROR);
        assert_eq!(evaluate(""), MATH_ERROR);
        assert_eq!(evaluate("6+3"), MATH_ERROR);
    }

    #[test]
    fn test_large_integers_stay_exact() {
        assert_eq!(evaluate("9223372036854775807 + 1"), "9223372036854775808");
        assert_eq!(evaluate("4000000000 * 4000000000"), "16000000000000000000");
        assert_eq!(
            evaluate("123456789012345678901234567890 - -1"),
            "123456789012345678901234567891"
        );
        assert_eq!(
            try_evaluate("-9223372036854775808 - 1"),
            Evaluation::Value(Number::Integer(BigInt::from(i64::MIN) - BigInt::from(1)))
        );
    }

    #[test]
    fn test_non_finite_quotient_is_a_failure() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(evaluate(&format!("{huge} / 3")), MATH_ERROR);
        assert_eq!(evaluate(&format!("{huge} / {huge}")), MATH_ERROR);
        assert_eq!(evaluate(&format!("{huge} * 2")), format!("2{}", "0".repeat(400)));
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("x"), None);
        assert_eq!(
            Operator::Divide.apply(&BigInt::from(1), &BigInt::zero()),
            None
        );
    }
}
