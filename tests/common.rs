//! Common test utilities for building algorithm definitions and catalogs.
use algoform::prelude::*;

/// Builds a number input with the given bounds, step and default.
#[allow(dead_code)]
pub fn number_input(
    key: &str,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    default: Option<f64>,
) -> AlgorithmInput {
    AlgorithmInput::Number(NumberInput {
        key: key.to_string(),
        label: key.to_string(),
        description: None,
        min,
        max,
        step,
        default,
        required: None,
    })
}

#[allow(dead_code)]
pub fn text_input(key: &str, required: Option<bool>, placeholder: Option<&str>) -> AlgorithmInput {
    AlgorithmInput::Text(TextInput {
        key: key.to_string(),
        label: key.to_string(),
        description: None,
        placeholder: placeholder.map(str::to_string),
        default: None,
        required,
    })
}

#[allow(dead_code)]
pub fn date_range_input(
    key: &str,
    required: Option<bool>,
    allow_open_start: bool,
    allow_open_end: bool,
) -> AlgorithmInput {
    AlgorithmInput::DateRange(DateRangeInput {
        key: key.to_string(),
        label: key.to_string(),
        description: None,
        required,
        date_range: DateRangeConfig {
            format: "YYYY-MM-DD".to_string(),
            allow_open_start,
            allow_open_end,
        },
    })
}

/// Wraps inputs into a definition with placeholder metadata.
#[allow(dead_code)]
pub fn definition(key: &str, inputs: Vec<AlgorithmInput>) -> AlgorithmDefinition {
    AlgorithmDefinition {
        key: key.to_string(),
        name: format!("Algorithm {}", key),
        category: "Testing".to_string(),
        description: None,
        version: "1.0.0".to_string(),
        ui: None,
        inputs,
        outputs: vec![],
    }
}

/// Two algorithms with disjoint inputs, for selection-switching tests.
///
/// `smoothing`: `window` in [1, 30] step 1 default 7, `metric` text, `period` date range (open end).
/// `ranking`: `top_k` in [0, 100] step 5 default 10.
#[allow(dead_code)]
pub fn create_sample_catalog() -> Catalog {
    Catalog::new(vec![
        definition(
            "smoothing",
            vec![
                number_input("window", Some(1.0), Some(30.0), Some(1.0), Some(7.0)),
                text_input("metric", None, Some("e.g. revenue")),
                date_range_input("period", None, false, true),
            ],
        ),
        definition(
            "ranking",
            vec![number_input("top_k", Some(0.0), Some(100.0), Some(5.0), Some(10.0))],
        ),
    ])
    .expect("sample catalog is well-formed")
}

#[allow(dead_code)]
pub const SAMPLE_CATALOG_JSON: &str = r#"[
  {
    "key": "forecast",
    "name": "Forecast",
    "category": "Time Series",
    "description": "Projects a series forward.",
    "version": "0.3.0",
    "inputs": [
      { "key": "horizon", "label": "Horizon", "type": "number", "min": 1, "max": 365, "step": 1, "default": 30 },
      { "key": "series", "label": "Series", "type": "text", "placeholder": "Name of the series to project forward in time" },
      { "key": "history", "label": "History", "type": "date_range", "required": false,
        "date_range": { "format": "YYYY-MM-DD", "allowOpenStart": true, "allowOpenEnd": false } }
    ],
    "outputs": [
      { "key": "projection", "label": "Projection", "type": "timeseries", "entity": "series" }
    ]
  },
  {
    "key": "sampler",
    "name": "Random Sampler",
    "category": "Utilities",
    "version": "1.0.0",
    "inputs": [
      { "key": "size", "label": "Sample Size", "type": "number", "required": false }
    ],
    "outputs": []
  }
]"#;
