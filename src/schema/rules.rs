use super::report::FieldStatus;
use crate::catalog::{AlgorithmInput, DateRangeInput, NumberInput, TextInput};
use crate::value::{DateRangeValue, FieldValue, format_number};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum distance from the step progression still accepted as aligned.
pub const STEP_TOLERANCE: f64 = 1e-8;

/// Syntactic `YYYY-MM-DD` check; calendar validity is not checked.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

pub fn is_iso_date(candidate: &str) -> bool {
    DATE_PATTERN.is_match(candidate)
}

/// One constraint applied to a present numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberCheck {
    Min(f64),
    Max(f64),
    /// The value must lie on `start, start + step, start + 2 * step, ...`.
    Step { start: f64, step: f64 },
}

impl NumberCheck {
    /// Returns the failure message if `value` violates this check.
    fn violation(&self, label: &str, value: f64) -> Option<String> {
        match *self {
            NumberCheck::Min(min) if value < min => {
                Some(format!("{} must be ≥ {}", label, format_number(min)))
            }
            NumberCheck::Max(max) if value > max => {
                Some(format!("{} must be ≤ {}", label, format_number(max)))
            }
            NumberCheck::Step { start, step } if !is_step_aligned(value, start, step) => Some(
                format!("{} must align with step {}", label, format_number(step)),
            ),
            _ => None,
        }
    }
}

fn is_step_aligned(value: f64, start: f64, step: f64) -> bool {
    let delta = value - start;
    let steps = (delta / step).round();
    (delta - steps * step).abs() < STEP_TOLERANCE
}

/// The compiled validation rule for a single field.
///
/// Rules are plain data so two compilations of the same definition compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Number {
        label: String,
        optional: bool,
        checks: Vec<NumberCheck>,
    },
    Text {
        label: String,
        optional: bool,
    },
    DateRange {
        label: String,
        required: bool,
        open_start: bool,
        open_end: bool,
    },
}

impl FieldRule {
    pub fn label(&self) -> &str {
        match self {
            FieldRule::Number { label, .. }
            | FieldRule::Text { label, .. }
            | FieldRule::DateRange { label, .. } => label,
        }
    }

    /// Checks a value against the rule, reporting the first failure.
    pub fn check(&self, value: &FieldValue) -> FieldStatus {
        match self {
            FieldRule::Number {
                label,
                optional,
                checks,
            } => check_number(label, *optional, checks, value),
            FieldRule::Text { label, optional } => check_text(label, *optional, value),
            FieldRule::DateRange {
                label,
                required,
                open_start,
                open_end,
            } => {
                let unbounded = DateRangeValue::default();
                let range = match value {
                    FieldValue::DateRange(range) => range,
                    FieldValue::Empty => &unbounded,
                    _ => return FieldStatus::invalid(format!("{} must be a date range", label)),
                };
                check_date_range(label, *required, *open_start, *open_end, range)
            }
        }
    }
}

fn check_number(label: &str, optional: bool, checks: &[NumberCheck], value: &FieldValue) -> FieldStatus {
    match value {
        FieldValue::Empty if optional => FieldStatus::Valid,
        FieldValue::Empty => FieldStatus::invalid(format!("{} is required", label)),
        FieldValue::Number(n) if n.is_finite() => checks
            .iter()
            .find_map(|check| check.violation(label, *n))
            .map_or(FieldStatus::Valid, FieldStatus::Invalid),
        _ => FieldStatus::invalid(format!("{} must be a number", label)),
    }
}

fn check_text(label: &str, optional: bool, value: &FieldValue) -> FieldStatus {
    match value {
        FieldValue::Empty if optional => FieldStatus::Valid,
        FieldValue::Text(_) if optional => FieldStatus::Valid,
        FieldValue::Text(s) if !s.trim().is_empty() => FieldStatus::Valid,
        FieldValue::Empty | FieldValue::Text(_) => {
            FieldStatus::invalid(format!("{} is required", label))
        }
        _ => FieldStatus::invalid(format!("{} must be text", label)),
    }
}

fn check_date_range(
    label: &str,
    required: bool,
    open_start: bool,
    open_end: bool,
    range: &DateRangeValue,
) -> FieldStatus {
    // Bound openness applies even when the field as a whole is optional.
    let bounds = [
        (range.start(), open_start, "start"),
        (range.end(), open_end, "end"),
    ];
    for (bound, open, side) in bounds {
        match bound {
            None if !open => {
                return FieldStatus::invalid(format!("{} {} is required", label, side));
            }
            Some(date) if !is_iso_date(date) => {
                return FieldStatus::invalid(format!("{} {} must be in YYYY-MM-DD", label, side));
            }
            _ => {}
        }
    }

    match (range.start(), range.end()) {
        (None, None) if required => FieldStatus::invalid(format!("{} is required", label)),
        // Fixed-width ISO dates order lexically.
        (Some(from), Some(to)) if from > to => {
            FieldStatus::invalid(format!("{} start must be before end", label))
        }
        _ => FieldStatus::Valid,
    }
}

/// Builds the rule for one input. Dispatch is on the statically known variant.
pub fn build_rule(input: &AlgorithmInput) -> FieldRule {
    match input {
        AlgorithmInput::Number(cfg) => number_rule(cfg),
        AlgorithmInput::Text(cfg) => text_rule(cfg),
        AlgorithmInput::DateRange(cfg) => date_range_rule(cfg),
    }
}

fn number_rule(cfg: &NumberInput) -> FieldRule {
    let mut checks = Vec::new();
    if let Some(min) = cfg.min {
        checks.push(NumberCheck::Min(min));
    }
    if let Some(max) = cfg.max {
        checks.push(NumberCheck::Max(max));
    }
    if let Some(step) = cfg.step.filter(|s| *s > 0.0) {
        checks.push(NumberCheck::Step {
            start: cfg.min.unwrap_or(0.0),
            step,
        });
    }
    FieldRule::Number {
        label: cfg.label.clone(),
        optional: cfg.required == Some(false),
        checks,
    }
}

fn text_rule(cfg: &TextInput) -> FieldRule {
    FieldRule::Text {
        label: cfg.label.clone(),
        optional: cfg.required == Some(false),
    }
}

fn date_range_rule(cfg: &DateRangeInput) -> FieldRule {
    FieldRule::DateRange {
        label: cfg.label.clone(),
        required: cfg.required != Some(false),
        open_start: cfg.date_range.allow_open_start,
        open_end: cfg.date_range.allow_open_end,
    }
}
