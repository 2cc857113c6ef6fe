use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported format specifier: {specifier:?}")]
    UnsupportedFormatSpecifier {
        specifier: String,
    },
    #[error("malformed number: {text:?}")]
    MalformedNumber {
        text: String,
    },
    #[error("expected {expected} fields, found {actual}")]
    FieldCount {
        expected: usize,
        actual: usize,
    },
}
