//! Output renderers for calculator results: plain text and JSON.

pub mod json;
pub mod text;

use crate::models::{Evaluation, Operator};

/// Everything a renderer needs to print one calculator run.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub operator: Operator,
    pub precision: usize,
    pub evaluations: &'a [Evaluation],
}

/// Trait for rendering calculator results to an output format.
pub trait OutputRenderer {
    /// Render a report to a string.
    fn render(&self, report: &Report<'_>) -> String;
}
