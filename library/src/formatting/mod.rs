pub mod error;
pub mod float_formatting;
pub mod format_specifier;
pub mod parsing;
pub mod vector_formatting;
