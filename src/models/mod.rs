//! Shared types used across all modules.
//!
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod evaluation;
pub mod operator;

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

pub use evaluation::Evaluation;
pub use operator::{Operator, UnknownOperator};

/// What to do with the last token when the token count is odd.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddPolicy {
    /// Fail before printing anything.
    #[default]
    Reject,
    /// Drop the trailing token with a warning.
    Skip,
}

impl fmt::Display for OddPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddPolicy::Reject => write!(f, "reject"),
            OddPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Explicit settings for one calculator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcSettings {
    pub operator: Operator,
    pub odd_tokens: OddPolicy,
    pub precision: usize,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            operator: Operator::default(),
            odd_tokens: OddPolicy::default(),
            precision: crate::constants::DEFAULT_PRECISION,
        }
    }
}
