use crate::catalog::{AlgorithmInput, DateRangeConfig, NumberInput, TextInput};
use crate::value::{DateRangeValue, FieldValue, format_number};

/// Placeholders longer than this many characters get a multi-line text control.
pub const MULTILINE_HINT_THRESHOLD: usize = 30;

/// Label shown by a date range control with neither bound set.
pub const DATE_RANGE_PLACEHOLDER: &str = "Pick a date range";

/// The input control a field is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Number(NumberWidget),
    Text(TextWidget),
    DateRange(DateRangeWidget),
}

impl Widget {
    pub fn for_input(input: &AlgorithmInput) -> Self {
        match input {
            AlgorithmInput::Number(cfg) => Widget::Number(NumberWidget::new(cfg)),
            AlgorithmInput::Text(cfg) => Widget::Text(TextWidget::new(cfg)),
            AlgorithmInput::DateRange(cfg) => Widget::DateRange(DateRangeWidget::new(&cfg.date_range)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Widget::Number(w) => format!(
                "slider [{} .. {}] + number entry",
                format_number(w.slider_min),
                format_number(w.slider_max)
            ),
            Widget::Text(w) if w.multiline => "multi-line text".to_string(),
            Widget::Text(_) => "text".to_string(),
            Widget::DateRange(w) => {
                let start = if w.allow_open_start { "optional" } else { "required" };
                let end = if w.allow_open_end { "optional" } else { "required" };
                format!("date range (start {}, end {})", start, end)
            }
        }
    }
}

/// A coarse slider and a precise numeric entry writing to the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberWidget {
    pub slider_min: f64,
    pub slider_max: f64,
    pub step: Option<f64>,
}

impl NumberWidget {
    pub fn new(cfg: &NumberInput) -> Self {
        let slider_min = cfg.min.unwrap_or(0.0);
        let slider_max = cfg.max.unwrap_or_else(|| (slider_min + 10.0).max(10.0));
        Self {
            slider_min,
            slider_max,
            step: cfg.step,
        }
    }

    /// Where the slider thumb sits for the current value.
    pub fn slider_position(&self, value: &FieldValue) -> f64 {
        value.as_number().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWidget {
    pub multiline: bool,
    pub placeholder: Option<String>,
}

impl TextWidget {
    pub fn new(cfg: &TextInput) -> Self {
        let multiline = cfg
            .placeholder
            .as_ref()
            .is_some_and(|hint| hint.chars().count() > MULTILINE_HINT_THRESHOLD);
        Self {
            multiline,
            placeholder: cfg.placeholder.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeWidget {
    pub allow_open_start: bool,
    pub allow_open_end: bool,
}

impl DateRangeWidget {
    pub fn new(cfg: &DateRangeConfig) -> Self {
        Self {
            allow_open_start: cfg.allow_open_start,
            allow_open_end: cfg.allow_open_end,
        }
    }

    /// The text shown on the closed control.
    pub fn label(&self, value: &DateRangeValue) -> String {
        match (value.start(), value.end()) {
            (Some(from), Some(to)) => format!("{} → {}", from, to),
            (Some(from), None) if self.allow_open_end => format!("{} → …", from),
            (None, Some(to)) if self.allow_open_start => format!("… → {}", to),
            _ => DATE_RANGE_PLACEHOLDER.to_string(),
        }
    }

    /// Merges a calendar pick into the current value.
    ///
    /// A side left empty by the pick is cleared when it may be open and keeps its
    /// previous date otherwise.
    pub fn apply_pick(
        &self,
        current: &DateRangeValue,
        from: Option<&str>,
        to: Option<&str>,
    ) -> DateRangeValue {
        let merge = |picked: Option<&str>, open: bool, previous: &Option<String>| match picked {
            Some(date) => Some(date.to_string()),
            None if open => None,
            None => previous.clone(),
        };
        DateRangeValue {
            from: merge(from, self.allow_open_start, &current.from),
            to: merge(to, self.allow_open_end, &current.to),
        }
    }
}

/// Selection behavior of the algorithm picker.
pub struct AlgorithmPicker;

impl AlgorithmPicker {
    /// Picking the option that is already selected clears the selection.
    pub fn next_selection(current: Option<&str>, picked: &str) -> Option<String> {
        if current == Some(picked) {
            None
        } else {
            Some(picked.to_string())
        }
    }
}
