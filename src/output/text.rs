//! Plain-text renderer: one `A OP B = RESULT` line per pair.
//!
//! Never styled, so output is byte-identical across runs and terminals.

use crate::output::{OutputRenderer, Report};

/// Line-per-pair text renderer.
pub struct TextRenderer;

impl OutputRenderer for TextRenderer {
    fn render(&self, report: &Report<'_>) -> String {
        let mut output = String::new();
        for eval in report.evaluations {
            output.push_str(&eval.line(report.precision));
            output.push('\n');
        }
        output
    }
}
