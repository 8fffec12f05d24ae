pub mod definition;
pub mod library;

pub use definition::*;
pub use library::*;
