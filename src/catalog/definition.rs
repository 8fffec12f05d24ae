use crate::error::CatalogError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The only date format the date range rules understand.
pub const ISO_DATE_FORMAT: &str = "YYYY-MM-DD";

/// A single catalog entry: a named, versioned operation and its typed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmDefinition {
    pub key: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    /// Free-form presentation hints, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<serde_json::Map<String, serde_json::Value>>,
    pub inputs: Vec<AlgorithmInput>,
    #[serde(default)]
    pub outputs: Vec<AlgorithmOutput>,
}

/// A typed parameter of an algorithm, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlgorithmInput {
    Number(NumberInput),
    Text(TextInput),
    DateRange(DateRangeInput),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberInput {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeInput {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub date_range: DateRangeConfig,
}

/// Governs which bounds of a date range may be left open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeConfig {
    #[serde(default = "default_date_format")]
    pub format: String,
    #[serde(default)]
    pub allow_open_start: bool,
    #[serde(default)]
    pub allow_open_end: bool,
}

fn default_date_format() -> String {
    ISO_DATE_FORMAT.to_string()
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        Self {
            format: default_date_format(),
            allow_open_start: false,
            allow_open_end: false,
        }
    }
}

/// Descriptive metadata about what an algorithm produces. Never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOutput {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub output_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlgorithmInput {
    pub fn key(&self) -> &str {
        match self {
            AlgorithmInput::Number(input) => &input.key,
            AlgorithmInput::Text(input) => &input.key,
            AlgorithmInput::DateRange(input) => &input.key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AlgorithmInput::Number(input) => &input.label,
            AlgorithmInput::Text(input) => &input.label,
            AlgorithmInput::DateRange(input) => &input.label,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            AlgorithmInput::Number(input) => input.description.as_deref(),
            AlgorithmInput::Text(input) => input.description.as_deref(),
            AlgorithmInput::DateRange(input) => input.description.as_deref(),
        }
    }

    /// Inputs are required unless explicitly marked `required: false`.
    pub fn is_required(&self) -> bool {
        let required = match self {
            AlgorithmInput::Number(input) => input.required,
            AlgorithmInput::Text(input) => input.required,
            AlgorithmInput::DateRange(input) => input.required,
        };
        required != Some(false)
    }

    /// The wire name of the input's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            AlgorithmInput::Number(_) => "number",
            AlgorithmInput::Text(_) => "text",
            AlgorithmInput::DateRange(_) => "date_range",
        }
    }
}

impl AlgorithmDefinition {
    pub fn input(&self, key: &str) -> Option<&AlgorithmInput> {
        self.inputs.iter().find(|input| input.key() == key)
    }

    pub fn input_keys(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(AlgorithmInput::key)
    }

    /// Checks the definition for defects that would compile into nonsensical rules.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.key.is_empty() {
            return Err(CatalogError::EmptyAlgorithmKey);
        }

        if let Some(duplicate) = self.input_keys().duplicates().next() {
            return Err(CatalogError::DuplicateInput {
                algorithm: self.key.clone(),
                input: duplicate.to_string(),
            });
        }

        for input in &self.inputs {
            match input {
                AlgorithmInput::Number(cfg) => self.validate_number(cfg)?,
                AlgorithmInput::DateRange(cfg) => {
                    if cfg.date_range.format != ISO_DATE_FORMAT {
                        return Err(CatalogError::UnsupportedDateFormat {
                            algorithm: self.key.clone(),
                            input: cfg.key.clone(),
                            format: cfg.date_range.format.clone(),
                        });
                    }
                }
                AlgorithmInput::Text(_) => {}
            }
        }
        Ok(())
    }

    fn validate_number(&self, cfg: &NumberInput) -> Result<(), CatalogError> {
        if let Some(step) = cfg.step
            && !(step.is_finite() && step > 0.0)
        {
            return Err(CatalogError::InvalidStep {
                algorithm: self.key.clone(),
                input: cfg.key.clone(),
                step,
            });
        }
        if let (Some(min), Some(max)) = (cfg.min, cfg.max)
            && min > max
        {
            return Err(CatalogError::InvertedBounds {
                algorithm: self.key.clone(),
                input: cfg.key.clone(),
                min,
                max,
            });
        }
        Ok(())
    }
}
