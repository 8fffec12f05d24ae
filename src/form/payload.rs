use crate::schema::FieldValues;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;

/// The request that would be sent to a backend running the selected algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    pub algorithm: Option<String>,
    pub params: IndexMap<String, FieldValue>,
}

impl Payload {
    /// Builds a payload, leaving out fields that currently hold no value.
    pub fn new(algorithm: Option<&str>, values: &FieldValues) -> Self {
        let params = values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            algorithm: algorithm.map(str::to_string),
            params,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Pretty-printed JSON for display.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
