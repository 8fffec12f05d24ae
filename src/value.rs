use serde::{Deserialize, Serialize};
use std::fmt;

/// The value held by a single form field.
///
/// Values are deliberately loosely typed: a widget may hand back text for a
/// numeric field, and that mismatch is reported by the field's rule instead of
/// being rejected on entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    DateRange(DateRangeValue),
    Empty,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date_range(&self) -> Option<&DateRangeValue> {
        match self {
            FieldValue::DateRange(range) => Some(range),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<DateRangeValue> for FieldValue {
    fn from(range: DateRangeValue) -> Self {
        FieldValue::DateRange(range)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", format_number(*n)),
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::DateRange(range) => write!(f, "{}", range),
            FieldValue::Empty => write!(f, "(empty)"),
        }
    }
}

/// A `{from, to}` pair of `YYYY-MM-DD` strings, either of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl DateRangeValue {
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    /// The start bound, treating an empty string as absent.
    pub fn start(&self) -> Option<&str> {
        self.from.as_deref().filter(|s| !s.is_empty())
    }

    /// The end bound, treating an empty string as absent.
    pub fn end(&self) -> Option<&str> {
        self.to.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_unbounded(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }
}

impl fmt::Display for DateRangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start().unwrap_or_default(),
            self.end().unwrap_or_default()
        )
    }
}

/// Formats a number the way it appears in messages: integral values print
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
