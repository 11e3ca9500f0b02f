//! JSON output renderer.
//!
//! Outputs `{"operator": "+", "precision": 2, "results": [...]}`. Non-finite
//! numbers become `null`; the `line` field keeps their text form.

use crate::output::{OutputRenderer, Report};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report<'_>) -> String {
        let results: Vec<serde_json::Value> = report
            .evaluations
            .iter()
            .map(|e| {
                let mut value = serde_json::to_value(e).unwrap_or_default();
                if let Some(fields) = value.as_object_mut() {
                    fields.insert("line".into(), e.line(report.precision).into());
                }
                value
            })
            .collect();

        let output = serde_json::json!({
            "operator": report.operator,
            "precision": report.precision,
            "results": results,
        });

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
