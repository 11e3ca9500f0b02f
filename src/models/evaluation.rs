//! Result of evaluating one pair of operands.

use serde::Serialize;
use std::fmt;

use super::Operator;

/// One evaluated pair: `lhs <operator> rhs = result`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Evaluation {
    /// Evaluate `lhs <operator> rhs`.
    pub fn new(operator: Operator, lhs: f64, rhs: f64) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result: operator.apply(lhs, rhs),
        }
    }

    /// Render as `A OP B = RESULT` with `precision` decimal places.
    pub fn line(&self, precision: usize) -> String {
        format!(
            "{:.p$} {} {:.p$} = {:.p$}",
            self.lhs,
            self.operator,
            self.rhs,
            self.result,
            p = precision,
        )
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line(crate::constants::DEFAULT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_uses_two_decimals_by_default() {
        let eval = Evaluation::new(Operator::Add, 3.0, 4.0);
        assert_eq!(eval.to_string(), "3.00 + 4.00 = 7.00");
    }

    #[test]
    fn line_honours_precision() {
        let eval = Evaluation::new(Operator::Divide, 1.0, 3.0);
        assert_eq!(eval.line(0), "1 / 3 = 0");
        assert_eq!(eval.line(4), "1.0000 / 3.0000 = 0.3333");
    }

    #[test]
    fn line_renders_infinity() {
        let eval = Evaluation::new(Operator::Divide, 1.0, 0.0);
        assert_eq!(eval.to_string(), "1.00 / 0.00 = inf");
    }

    #[test]
    fn negative_operands() {
        let eval = Evaluation::new(Operator::Subtract, -1.5, 2.25);
        assert_eq!(eval.to_string(), "-1.50 - 2.25 = -3.75");
    }
}
