//! Presentation helpers: which control each field uses, how terminal text maps to
//! field values, and how validation results are summarized.

pub mod input;
pub mod summary;
pub mod widget;

pub use input::parse_raw_value;
pub use summary::SummaryFormatter;
pub use widget::{AlgorithmPicker, DateRangeWidget, NumberWidget, TextWidget, Widget};
