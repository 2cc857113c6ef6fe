use crate::locale::error::LocaleError;
use crate::locale::known_locale::KnownLocale;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub(crate) const INVARIANT_LIST_SEPARATOR: &str = ",";
pub(crate) const INVARIANT_DECIMAL_SEPARATOR: &str = ".";
pub(crate) const INVARIANT_NEGATIVE_SIGN: &str = "-";
pub(crate) const INVARIANT_NAN_SYMBOL: &str = "NaN";
pub(crate) const INVARIANT_POSITIVE_INFINITY_SYMBOL: &str = "Infinity";
pub(crate) const INVARIANT_NEGATIVE_INFINITY_SYMBOL: &str = "-Infinity";

/// Used in place of the list separator when it would be indistinguishable
/// from the decimal separator.
pub(crate) const FALLBACK_NUMBER_LIST_SEPARATOR: &str = ";";

/// Conventions a number list is written with: how fields are separated,
/// how the fractional part is marked and how special values are spelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocaleDescription")]
pub struct Locale {
    name: String,
    list_separator: String,
    decimal_separator: String,
    negative_sign: String,
    nan_symbol: String,
    positive_infinity_symbol: String,
    negative_infinity_symbol: String,
}

/// Unvalidated form of a [`Locale`], as written in JSON. Symbols that are
/// left out take the invariant locale's spelling.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LocaleDescription {
    #[serde(default)]
    pub name: String,
    pub list_separator: String,
    pub decimal_separator: String,
    #[serde(default = "default_negative_sign")]
    pub negative_sign: String,
    #[serde(default = "default_nan_symbol")]
    pub nan_symbol: String,
    #[serde(default = "default_positive_infinity_symbol")]
    pub positive_infinity_symbol: String,
    #[serde(default = "default_negative_infinity_symbol")]
    pub negative_infinity_symbol: String,
}

fn default_negative_sign() -> String {
    INVARIANT_NEGATIVE_SIGN.to_string()
}

fn default_nan_symbol() -> String {
    INVARIANT_NAN_SYMBOL.to_string()
}

fn default_positive_infinity_symbol() -> String {
    INVARIANT_POSITIVE_INFINITY_SYMBOL.to_string()
}

fn default_negative_infinity_symbol() -> String {
    INVARIANT_NEGATIVE_INFINITY_SYMBOL.to_string()
}

impl LocaleDescription {
    #[must_use]
    pub fn new(name: &str, list_separator: &str, decimal_separator: &str) -> Self {
        Self {
            name: name.to_string(),
            list_separator: list_separator.to_string(),
            decimal_separator: decimal_separator.to_string(),
            negative_sign: default_negative_sign(),
            nan_symbol: default_nan_symbol(),
            positive_infinity_symbol: default_positive_infinity_symbol(),
            negative_infinity_symbol: default_negative_infinity_symbol(),
        }
    }
}

#[must_use]
fn number_list_separator_of<'a>(list_separator: &'a str, decimal_separator: &str) -> &'a str {
    if list_separator == decimal_separator {
        FALLBACK_NUMBER_LIST_SEPARATOR
    } else {
        list_separator
    }
}

impl TryFrom<LocaleDescription> for Locale {
    type Error = LocaleError;

    fn try_from(description: LocaleDescription) -> Result<Self, Self::Error> {
        let required = [
            ("list separator", &description.list_separator),
            ("decimal separator", &description.decimal_separator),
            ("negative sign", &description.negative_sign),
            ("NaN symbol", &description.nan_symbol),
            ("positive infinity symbol", &description.positive_infinity_symbol),
            ("negative infinity symbol", &description.negative_infinity_symbol),
        ];
        if let Some((which, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(LocaleError::EmptySymbol { which: *which });
        }

        if description.list_separator.trim().is_empty() {
            return Err(LocaleError::BlankListSeparator);
        }

        let separator = number_list_separator_of(&description.list_separator, &description.decimal_separator);
        let symbols = [
            ("decimal separator", &description.decimal_separator),
            ("negative sign", &description.negative_sign),
            ("NaN symbol", &description.nan_symbol),
            ("positive infinity symbol", &description.positive_infinity_symbol),
            ("negative infinity symbol", &description.negative_infinity_symbol),
        ];
        let clashing = symbols.iter().find(|(_, value)| value.contains(separator));
        if let Some((which, _)) = clashing {
            return Err(LocaleError::SymbolContainsListSeparator { which: *which, separator: separator.to_string() });
        }

        if description.list_separator == description.decimal_separator {
            warn!(
                "locale '{}' separates lists with its decimal separator '{}'; numbers will be listed with '{}'",
                description.name, description.decimal_separator, FALLBACK_NUMBER_LIST_SEPARATOR,
            );
        }

        Ok(Self {
            name: description.name,
            list_separator: description.list_separator,
            decimal_separator: description.decimal_separator,
            negative_sign: description.negative_sign,
            nan_symbol: description.nan_symbol,
            positive_infinity_symbol: description.positive_infinity_symbol,
            negative_infinity_symbol: description.negative_infinity_symbol,
        })
    }
}

impl Locale {
    pub fn new(name: &str, list_separator: &str, decimal_separator: &str) -> Result<Self, LocaleError> {
        Self::try_from(LocaleDescription::new(name, list_separator, decimal_separator))
    }

    /// Culture-neutral conventions, suitable for files and logs.
    #[must_use]
    pub fn invariant() -> Self {
        Self::from_known_separators("", INVARIANT_LIST_SEPARATOR, INVARIANT_DECIMAL_SEPARATOR)
    }

    #[must_use]
    pub(crate) fn from_known_separators(name: &str, list_separator: &str, decimal_separator: &str) -> Self {
        Self {
            name: name.to_string(),
            list_separator: list_separator.to_string(),
            decimal_separator: decimal_separator.to_string(),
            negative_sign: default_negative_sign(),
            nan_symbol: default_nan_symbol(),
            positive_infinity_symbol: default_positive_infinity_symbol(),
            negative_infinity_symbol: default_negative_infinity_symbol(),
        }
    }

    /// Looks up one of the built-in locales; `""` and `"invariant"` both
    /// name the invariant one.
    pub fn by_name(name: &str) -> Result<Self, LocaleError> {
        KnownLocale::from_str(name)
            .map(KnownLocale::locale)
            .map_err(|_| LocaleError::UnknownLocale { name: name.to_string() })
    }

    pub fn from_json(text: &str) -> Result<Self, LocaleError> {
        let description: LocaleDescription = serde_json::from_str(text)
            .map_err(|e| LocaleError::MalformedDescription { what: e.to_string() })?;
        Self::try_from(description)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }

    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    #[must_use]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[must_use]
    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    #[must_use]
    pub fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    #[must_use]
    pub fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    /// Separator placed between the numbers of a vector or ray. Same as the
    /// list separator unless that one collides with the decimal separator.
    #[must_use]
    pub fn number_list_separator(&self) -> &str {
        number_list_separator_of(&self.list_separator, &self.decimal_separator)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}
