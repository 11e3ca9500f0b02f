//! Pairwise evaluation of positional tokens.
//!
//! Tokens are validated up front so a bad token fails the run before any
//! line is printed. Valid tokens are consumed two at a time, in order.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{CalcSettings, Evaluation, OddPolicy};

/// Errors produced while evaluating a token list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("no operands supplied")]
    NoOperands,

    #[error("argument {position} ('{token}') is not a number")]
    InvalidNumber { token: String, position: usize },

    #[error("argument {position} ('{token}') has no partner; operands must come in pairs")]
    UnpairedToken { token: String, position: usize },
}

/// Parse a single token as `f64`. `position` is 1-based and only used for
/// error reporting.
pub fn parse_token(token: &str, position: usize) -> Result<f64, CalcError> {
    token.parse::<f64>().map_err(|_| CalcError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

/// Evaluate every consecutive pair of `tokens` with the configured operator.
pub fn evaluate_tokens<S: AsRef<str>>(
    settings: &CalcSettings,
    tokens: &[S],
) -> Result<Vec<Evaluation>, CalcError> {
    if tokens.is_empty() {
        return Err(CalcError::NoOperands);
    }

    let mut usable = tokens.len();
    if usable % 2 == 1 {
        let last = tokens[usable - 1].as_ref();
        match settings.odd_tokens {
            OddPolicy::Reject => {
                return Err(CalcError::UnpairedToken {
                    token: last.to_string(),
                    position: usable,
                });
            }
            OddPolicy::Skip => {
                warn!(token = last, position = usable, "ignoring unpaired trailing argument");
                usable -= 1;
            }
        }
    }

    let values = tokens[..usable]
        .iter()
        .enumerate()
        .map(|(i, t)| parse_token(t.as_ref(), i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let evaluations: Vec<Evaluation> = values
        .chunks_exact(2)
        .map(|pair| Evaluation::new(settings.operator, pair[0], pair[1]))
        .collect();

    debug!(
        operator = %settings.operator,
        pairs = evaluations.len(),
        "evaluated argument pairs"
    );

    Ok(evaluations)
}
