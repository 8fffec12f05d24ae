use thiserror::Error;

/// Errors raised while loading or validating an algorithm catalog.
///
/// A catalog entry that trips one of these is a configuration defect; it is
/// rejected when the [`Catalog`](crate::catalog::Catalog) is built instead of
/// being compiled into rules that can never be satisfied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("An algorithm definition has an empty key")]
    EmptyAlgorithmKey,

    #[error("Algorithm '{0}' is defined more than once in the catalog")]
    DuplicateAlgorithm(String),

    #[error("Algorithm '{algorithm}' declares input '{input}' more than once")]
    DuplicateInput { algorithm: String, input: String },

    #[error("Input '{input}' of algorithm '{algorithm}' has an invalid step {step}; step must be > 0")]
    InvalidStep {
        algorithm: String,
        input: String,
        step: f64,
    },

    #[error("Input '{input}' of algorithm '{algorithm}' has min {min} greater than max {max}")]
    InvertedBounds {
        algorithm: String,
        input: String,
        min: f64,
        max: f64,
    },

    #[error(
        "Input '{input}' of algorithm '{algorithm}' uses unsupported date format '{format}' (expected YYYY-MM-DD)"
    )]
    UnsupportedDateFormat {
        algorithm: String,
        input: String,
        format: String,
    },
}

/// Errors returned by the [`FormController`](crate::form::FormController) when a
/// caller edits a form in a way the current selection cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("No algorithm is selected")]
    NoAlgorithmSelected,

    #[error("Field '{field}' is not an input of algorithm '{algorithm}'")]
    UnknownField { algorithm: String, field: String },
}
