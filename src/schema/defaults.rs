use crate::catalog::AlgorithmInput;
use crate::value::{DateRangeValue, FieldValue};

/// Derives the initial value of a field from its declaration.
///
/// * Number: `default`, else `min`, else `0`.
/// * Text: `default`, else the empty string.
/// * Date range: both bounds empty.
pub fn default_value(input: &AlgorithmInput) -> FieldValue {
    match input {
        AlgorithmInput::Number(cfg) => FieldValue::Number(cfg.default.or(cfg.min).unwrap_or(0.0)),
        AlgorithmInput::Text(cfg) => FieldValue::Text(cfg.default.clone().unwrap_or_default()),
        AlgorithmInput::DateRange(_) => {
            FieldValue::DateRange(DateRangeValue::new(Some(""), Some("")))
        }
    }
}
