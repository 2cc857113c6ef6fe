use crate::locale::locale::Locale;
use strum_macros::{EnumCount, EnumIter, EnumString};

/// Built-in locales, parsed from their culture names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum KnownLocale {
    #[strum(serialize = "en-US")]
    EnglishUnitedStates,
    #[strum(serialize = "en-GB")]
    EnglishUnitedKingdom,
    #[strum(serialize = "ja")]
    Japanese,
    #[strum(serialize = "nl-NL")]
    DutchNetherlands,
    #[strum(serialize = "de-DE")]
    GermanGermany,
    #[strum(serialize = "fr")]
    French,
    #[strum(serialize = "", serialize = "invariant")]
    Invariant,
}

impl KnownLocale {
    #[must_use]
    pub const fn culture_name(self) -> &'static str {
        match self {
            KnownLocale::EnglishUnitedStates => "en-US",
            KnownLocale::EnglishUnitedKingdom => "en-GB",
            KnownLocale::Japanese => "ja",
            KnownLocale::DutchNetherlands => "nl-NL",
            KnownLocale::GermanGermany => "de-DE",
            KnownLocale::French => "fr",
            KnownLocale::Invariant => "",
        }
    }

    #[must_use]
    const fn separators(self) -> (&'static str, &'static str) {
        match self {
            KnownLocale::EnglishUnitedStates
            | KnownLocale::EnglishUnitedKingdom
            | KnownLocale::Japanese
            | KnownLocale::Invariant => (",", "."),
            KnownLocale::DutchNetherlands
            | KnownLocale::GermanGermany
            | KnownLocale::French => (";", ","),
        }
    }

    #[must_use]
    pub fn locale(self) -> Locale {
        let (list_separator, decimal_separator) = self.separators();
        Locale::from_known_separators(self.culture_name(), list_separator, decimal_separator)
    }
}

impl From<KnownLocale> for Locale {
    fn from(known: KnownLocale) -> Self {
        known.locale()
    }
}
