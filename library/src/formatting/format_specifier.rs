use crate::formatting::error::FormatError;
use derive_more::Display;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum FormatSpecifier {
    /// Shortest text that parses back to the very same value; scientific
    /// notation once there are more than seven integral digits.
    #[default]
    #[display("G")]
    General,
    /// Same digits as [`FormatSpecifier::General`], kept in fixed notation
    /// for up to nine integral digits.
    #[display("R")]
    RoundTrip,
}

impl FormatSpecifier {
    const GENERAL_PRECISION: i32 = 7;
    const ROUND_TRIP_PRECISION: i32 = 9;

    /// Absent and empty specifiers both mean [`FormatSpecifier::General`].
    /// Matching is case-sensitive.
    pub fn parse(specifier: Option<&str>) -> Result<Self, FormatError> {
        match specifier.unwrap_or_default() {
            "" | "G" => Ok(FormatSpecifier::General),
            "R" => Ok(FormatSpecifier::RoundTrip),
            unsupported => Err(FormatError::UnsupportedFormatSpecifier { specifier: unsupported.to_string() }),
        }
    }

    /// Decimal exponent from which scientific notation takes over.
    #[must_use]
    pub(crate) const fn precision(self) -> i32 {
        match self {
            FormatSpecifier::General => FormatSpecifier::GENERAL_PRECISION,
            FormatSpecifier::RoundTrip => FormatSpecifier::ROUND_TRIP_PRECISION,
        }
    }
}

impl FromStr for FormatSpecifier {
    type Err = FormatError;

    fn from_str(specifier: &str) -> Result<Self, Self::Err> {
        FormatSpecifier::parse(Some(specifier))
    }
}
