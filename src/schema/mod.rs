use crate::catalog::AlgorithmDefinition;
use crate::value::FieldValue;
use indexmap::IndexMap;
use tracing::debug;

pub mod defaults;
pub mod report;
pub mod rules;

pub use defaults::default_value;
pub use report::{FieldStatus, ValidationReport};
pub use rules::{FieldRule, NumberCheck, STEP_TOLERANCE};

/// Current value of every field of a form, keyed by input key in declaration order.
pub type FieldValues = IndexMap<String, FieldValue>;

/// Initial value of every field, as derived from the definition.
pub type DefaultValues = IndexMap<String, FieldValue>;

/// One validation rule per input key of an algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSchema {
    algorithm: String,
    rules: IndexMap<String, FieldRule>,
}

impl CompiledSchema {
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn rule(&self, key: &str) -> Option<&FieldRule> {
        self.rules.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validates one field. A missing value is checked as empty.
    pub fn validate_field(&self, key: &str, values: &FieldValues) -> Option<FieldStatus> {
        let rule = self.rules.get(key)?;
        Some(rule.check(values.get(key).unwrap_or(&FieldValue::Empty)))
    }

    /// Validates every field in the schema against `values`.
    pub fn validate(&self, values: &FieldValues) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (key, rule) in &self.rules {
            let value = values.get(key).unwrap_or(&FieldValue::Empty);
            report.insert(key.clone(), rule.check(value));
        }
        report
    }
}

/// The output of compiling one algorithm definition.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledForm {
    pub schema: CompiledSchema,
    pub defaults: DefaultValues,
}

/// Compiles an [`AlgorithmDefinition`] into validation rules and default values.
///
/// Compilation is a pure function of the definition. The definition is expected
/// to have passed [`AlgorithmDefinition::validate`], which every definition
/// served by a [`Catalog`](crate::catalog::Catalog) has.
pub struct SchemaCompiler<'a> {
    definition: &'a AlgorithmDefinition,
}

impl<'a> SchemaCompiler<'a> {
    pub fn new(definition: &'a AlgorithmDefinition) -> Self {
        debug_assert!(
            definition.validate().is_ok(),
            "malformed algorithm definition '{}'",
            definition.key
        );
        Self { definition }
    }

    pub fn compile_schema(&self) -> CompiledSchema {
        let rules = self
            .definition
            .inputs
            .iter()
            .map(|input| (input.key().to_string(), rules::build_rule(input)))
            .collect();
        CompiledSchema {
            algorithm: self.definition.key.clone(),
            rules,
        }
    }

    pub fn default_values(&self) -> DefaultValues {
        self.definition
            .inputs
            .iter()
            .map(|input| (input.key().to_string(), default_value(input)))
            .collect()
    }

    pub fn compile(&self) -> CompiledForm {
        let schema = self.compile_schema();
        let defaults = self.default_values();
        debug!(
            algorithm = %self.definition.key,
            fields = schema.len(),
            "compiled form schema"
        );
        CompiledForm { schema, defaults }
    }
}
