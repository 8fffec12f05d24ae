use crate::catalog::{AlgorithmDefinition, Catalog};
use crate::error::FormError;
use crate::schema::{CompiledSchema, DefaultValues, FieldStatus, FieldValues, SchemaCompiler, ValidationReport};
use crate::value::FieldValue;
use tracing::{debug, trace};

pub mod payload;

pub use payload::Payload;

/// The form for one selected algorithm: its compiled schema, defaults and live values.
#[derive(Debug, Clone)]
pub struct ActiveForm<'a> {
    definition: &'a AlgorithmDefinition,
    schema: CompiledSchema,
    defaults: DefaultValues,
    values: FieldValues,
}

impl<'a> ActiveForm<'a> {
    fn new(definition: &'a AlgorithmDefinition) -> Self {
        let compiled = SchemaCompiler::new(definition).compile();
        Self {
            definition,
            values: compiled.defaults.clone(),
            schema: compiled.schema,
            defaults: compiled.defaults,
        }
    }

    pub fn definition(&self) -> &'a AlgorithmDefinition {
        self.definition
    }

    pub fn schema(&self) -> &CompiledSchema {
        &self.schema
    }

    pub fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }
}

/// Which algorithm, if any, the form is currently built for.
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    NoneSelected,
    Selected(ActiveForm<'a>),
}

/// Holds the field values of the selected algorithm and keeps validation in step with them.
///
/// Selecting an algorithm replaces schema, defaults and values in one step, so a
/// reader never observes values of one algorithm paired with the rules of
/// another. Editing a field never recompiles the schema. Validation is derived
/// from the current values on every read and is never cached.
///
/// Controllers borrow the catalog but own their state; independent controllers
/// over the same catalog do not share field values.
#[derive(Debug, Clone)]
pub struct FormController<'a> {
    catalog: &'a Catalog,
    selection: Selection<'a>,
}

impl<'a> FormController<'a> {
    /// A controller with nothing selected.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::NoneSelected,
        }
    }

    /// A controller with the first catalog entry selected, if there is one.
    pub fn with_first_algorithm(catalog: &'a Catalog) -> Self {
        let mut controller = Self::new(catalog);
        if let Some(key) = catalog.first_key() {
            controller.select_algorithm(key);
        }
        controller
    }

    /// Selects an algorithm by key, rebuilding the form from its defaults.
    ///
    /// An unknown key clears the selection. Returns whether an algorithm is now selected.
    pub fn select_algorithm(&mut self, key: &str) -> bool {
        self.selection = match self.catalog.get_by_key(key) {
            Some(definition) => {
                debug!(algorithm = %key, "selected algorithm");
                Selection::Selected(ActiveForm::new(definition))
            }
            None => {
                debug!(algorithm = %key, "algorithm not found in catalog; clearing form");
                Selection::NoneSelected
            }
        };
        self.is_selected()
    }

    pub fn clear(&mut self) {
        self.selection = Selection::NoneSelected;
    }

    pub fn selection(&self) -> &Selection<'a> {
        &self.selection
    }

    pub fn is_selected(&self) -> bool {
        matches!(self.selection, Selection::Selected(_))
    }

    pub fn active(&self) -> Option<&ActiveForm<'a>> {
        match &self.selection {
            Selection::Selected(form) => Some(form),
            Selection::NoneSelected => None,
        }
    }

    pub fn selected_key(&self) -> Option<&'a str> {
        self.active().map(|form| form.definition.key.as_str())
    }

    pub fn selected_algorithm(&self) -> Option<&'a AlgorithmDefinition> {
        self.active().map(|form| form.definition)
    }

    pub fn schema(&self) -> Option<&CompiledSchema> {
        self.active().map(ActiveForm::schema)
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.active().and_then(|form| form.values.get(key))
    }

    /// Replaces the value of one field and returns its fresh validation status.
    pub fn set_field_value(
        &mut self,
        key: &str,
        value: impl Into<FieldValue>,
    ) -> Result<FieldStatus, FormError> {
        let form = match &mut self.selection {
            Selection::Selected(form) => form,
            Selection::NoneSelected => return Err(FormError::NoAlgorithmSelected),
        };
        let definition = form.definition;
        let Some(slot) = form.values.get_mut(key) else {
            return Err(FormError::UnknownField {
                algorithm: definition.key.clone(),
                field: key.to_string(),
            });
        };
        *slot = value.into();

        let status = form
            .schema
            .validate_field(key, &form.values)
            .unwrap_or(FieldStatus::Valid);
        trace!(field = %key, valid = status.is_valid(), "field value updated");
        Ok(status)
    }

    /// Restores every field of the selected algorithm to its default.
    pub fn reset(&mut self) {
        if let Selection::Selected(form) = &mut self.selection {
            form.values = form.defaults.clone();
        }
    }

    /// Validation of every field against the current values. Empty when nothing is selected.
    pub fn validation(&self) -> ValidationReport {
        self.active()
            .map(|form| form.schema.validate(&form.values))
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.is_selected() && self.validation().is_valid()
    }

    /// The would-be request for the current state.
    pub fn payload(&self) -> Payload {
        match self.active() {
            Some(form) => Payload::new(Some(&form.definition.key), &form.values),
            None => Payload::new(None, &FieldValues::new()),
        }
    }
}
