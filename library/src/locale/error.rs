use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale: {name:?}")]
    UnknownLocale {
        name: String,
    },
    #[error("malformed locale description: {what:?}")]
    MalformedDescription {
        what: String,
    },
    #[error("locale {which} must not be empty")]
    EmptySymbol {
        which: &'static str,
    },
    #[error("locale list separator must not be blank")]
    BlankListSeparator,
    #[error("locale {which} contains the number list separator {separator:?}")]
    SymbolContainsListSeparator {
        which: &'static str,
        separator: String,
    },
}
