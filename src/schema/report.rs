use indexmap::IndexMap;
use serde::Serialize;

/// Pass/fail outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn invalid(message: impl Into<String>) -> Self {
        FieldStatus::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Invalid(message) => Some(message),
        }
    }
}

/// Per-field validation results, in the order the inputs were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    fields: IndexMap<String, FieldStatus>,
}

impl ValidationReport {
    pub(crate) fn insert(&mut self, key: String, status: FieldStatus) {
        self.fields.insert(key, status);
    }

    pub fn status(&self, key: &str) -> Option<&FieldStatus> {
        self.fields.get(key)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldStatus::is_valid)
    }

    /// Failing fields and their messages.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(key, status)| status.message().map(|m| (key.as_str(), m)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldStatus)> {
        self.fields.iter().map(|(key, status)| (key.as_str(), status))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
