//! # Algoform - Algorithm Form Schema Compiler
//!
//! **Algoform** turns declarative descriptions of parameterized algorithms into
//! live input forms. Each algorithm in a catalog declares typed inputs (numbers,
//! free text, date ranges) with constraints; Algoform compiles those declarations
//! into validation rules and default values, tracks what the user has entered,
//! and produces the JSON payload a backend running the algorithm would receive.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Catalog**: Build a [`Catalog`](catalog::Catalog) from JSON (or use the embedded one). Malformed definitions are rejected here.
//! 2.  **Compile**: A [`SchemaCompiler`](schema::SchemaCompiler) turns one definition into a `CompiledSchema` and a map of defaults.
//! 3.  **Edit**: A [`FormController`](form::FormController) holds the selected algorithm's values, recompiling only when the selection changes.
//! 4.  **Inspect**: Read per-field validation and the payload preview at any time; both always reflect the latest edit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use algoform::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::embedded()?;
//!     let mut form = FormController::new(&catalog);
//!
//!     if !form.select_algorithm("moving-average") {
//!         println!("-> No such algorithm.");
//!         return Ok(());
//!     }
//!
//!     let status = form.set_field_value("window", 12.5)?;
//!     if let Some(message) = status.message() {
//!         println!("-> Window rejected: {}", message);
//!     }
//!     form.set_field_value("window", 14.0)?;
//!
//!     for (key, message) in form.validation().errors() {
//!         println!("-> {}: {}", key, message);
//!     }
//!
//!     println!("{}", form.payload().to_pretty_json()?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod prelude;
pub mod render;
pub mod schema;
pub mod value;
