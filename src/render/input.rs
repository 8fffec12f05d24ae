use crate::catalog::AlgorithmInput;
use crate::value::{DateRangeValue, FieldValue};

/// Separator between the two bounds of a date range typed as text.
pub const RANGE_SEPARATOR: &str = "..";

/// Turns raw terminal text into the value a widget of the given input would produce.
///
/// Numbers that fail to parse are kept as text so the field's rule can report them.
/// Date ranges are written `FROM..TO`; either side may be blank.
pub fn parse_raw_value(input: &AlgorithmInput, raw: &str) -> FieldValue {
    match input {
        AlgorithmInput::Number(_) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                FieldValue::Empty
            } else {
                trimmed
                    .parse::<f64>()
                    .map_or_else(|_| FieldValue::Text(raw.to_string()), FieldValue::Number)
            }
        }
        AlgorithmInput::Text(_) => FieldValue::Text(raw.to_string()),
        AlgorithmInput::DateRange(_) => FieldValue::DateRange(parse_date_range(raw)),
    }
}

fn parse_date_range(raw: &str) -> DateRangeValue {
    let bound = |side: &str| {
        let side = side.trim();
        (!side.is_empty()).then(|| side.to_string())
    };
    match raw.split_once(RANGE_SEPARATOR) {
        Some((from, to)) => DateRangeValue {
            from: bound(from),
            to: bound(to),
        },
        None => DateRangeValue {
            from: bound(raw),
            to: None,
        },
    }
}
