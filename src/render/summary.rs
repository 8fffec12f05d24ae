use super::widget::Widget;
use crate::catalog::AlgorithmDefinition;
use crate::schema::{FieldStatus, FieldValues, ValidationReport};
use crate::value::FieldValue;
use itertools::Itertools;

/// Formats algorithm details, form fields and validation results as plain text.
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Name, optional description, and `v<version> • <category>`.
    pub fn format_details(algorithm: &AlgorithmDefinition) -> String {
        let mut lines = vec![algorithm.name.clone()];
        if let Some(description) = &algorithm.description {
            lines.push(description.clone());
        }
        lines.push(format!("v{} • {}", algorithm.version, algorithm.category));
        lines.join("\n")
    }

    /// One line per input, in declaration order: `✓ <label> passed` or `✗ <label> <message>`.
    pub fn summary_lines(algorithm: &AlgorithmDefinition, report: &ValidationReport) -> Vec<String> {
        algorithm
            .inputs
            .iter()
            .map(|input| match report.status(input.key()) {
                Some(FieldStatus::Invalid(message)) => format!("✗ {} {}", input.label(), message),
                // Inputs missing from the report have not been checked.
                None => format!("✗ {} failed", input.label()),
                Some(FieldStatus::Valid) => format!("✓ {} passed", input.label()),
            })
            .collect()
    }

    pub fn format_summary(algorithm: &AlgorithmDefinition, report: &ValidationReport) -> String {
        Self::summary_lines(algorithm, report).join("\n")
    }

    /// A text rendering of every field: label, control, value, description and status.
    pub fn format_form(
        algorithm: &AlgorithmDefinition,
        values: &FieldValues,
        report: &ValidationReport,
    ) -> String {
        algorithm
            .inputs
            .iter()
            .map(|input| {
                let value = values.get(input.key()).unwrap_or(&FieldValue::Empty);
                let widget = Widget::for_input(input);
                let shown = match (&widget, value) {
                    (Widget::DateRange(w), FieldValue::DateRange(range)) => w.label(range),
                    _ => value.to_string(),
                };
                let mut block = vec![
                    format!("{} ({})", input.label(), input.key()),
                    format!("  control: {}", widget.describe()),
                    format!("  value:   {}", shown),
                ];
                if let Some(description) = input.description() {
                    block.push(format!("  note:    {}", description));
                }
                if let Some(message) = report.status(input.key()).and_then(FieldStatus::message) {
                    block.push(format!("  error:   {}", message));
                }
                block.join("\n")
            })
            .join("\n\n")
    }
}
