//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the algoform crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use algoform::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/algorithms.json")?;
//! let mut form = FormController::with_first_algorithm(&catalog);
//!
//! if let Some(algorithm) = form.selected_algorithm() {
//!     println!("{}", SummaryFormatter::format_summary(algorithm, &form.validation()));
//! }
//! form.reset();
//! # Ok(())
//! # }
//! ```

// Catalog model and access
pub use crate::catalog::{
    AlgorithmDefinition, AlgorithmInput, AlgorithmOption, AlgorithmOutput, Catalog,
    DateRangeConfig, DateRangeInput, NumberInput, TextInput,
};

// Compilation and validation
pub use crate::schema::{
    CompiledForm, CompiledSchema, DefaultValues, FieldRule, FieldStatus, FieldValues,
    SchemaCompiler, ValidationReport,
};

// Form state
pub use crate::form::{FormController, Payload, Selection};
pub use crate::value::{DateRangeValue, FieldValue};

// Presentation
pub use crate::render::{SummaryFormatter, Widget, parse_raw_value};

// Error types
pub use crate::error::{CatalogError, FormError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
