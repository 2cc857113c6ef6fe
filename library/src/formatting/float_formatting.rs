use crate::formatting::format_specifier::FormatSpecifier;
use crate::locale::locale::Locale;
use std::fmt::{Display, Formatter};

/// Significant decimal digits of a non-negative finite value, read as
/// `d.ddd × 10^exponent`. Trailing zeros are never kept; zero is `"0"`.
#[derive(Clone, Debug, PartialEq)]
struct DecimalDigits {
    digits: String,
    exponent: i32,
}

impl DecimalDigits {
    /// Fewest digits that still parse back to `magnitude` bit-for-bit.
    #[must_use]
    fn shortest(magnitude: f32) -> Self {
        Self::from_scientific(format!("{:e}", magnitude).as_str())
    }

    #[must_use]
    fn from_scientific(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').expect("std scientific output has an exponent");

        let mut digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push('0');
        }

        let exponent = exponent.parse::<i32>().expect("std scientific output has an integer exponent");
        let exponent = if digits == "0" { 0 } else { exponent };
        Self { digits, exponent }
    }

    #[must_use]
    fn uses_fixed_notation(&self, precision: i32) -> bool {
        self.exponent > -5 && self.exponent < precision
    }

    #[must_use]
    fn layout(&self, precision: i32, decimal_separator: &str) -> String {
        if self.uses_fixed_notation(precision) {
            self.layout_fixed(decimal_separator)
        } else {
            self.layout_scientific(decimal_separator)
        }
    }

    #[must_use]
    fn layout_fixed(&self, decimal_separator: &str) -> String {
        let digits = self.digits.as_str();
        if self.exponent < 0 {
            let leading_zeros = "0".repeat((-self.exponent - 1) as usize);
            return format!("0{decimal_separator}{leading_zeros}{digits}");
        }

        let integral_length = self.exponent as usize + 1;
        if digits.len() <= integral_length {
            format!("{digits}{}", "0".repeat(integral_length - digits.len()))
        } else {
            let (integral, fractional) = digits.split_at(integral_length);
            format!("{integral}{decimal_separator}{fractional}")
        }
    }

    #[must_use]
    fn layout_scientific(&self, decimal_separator: &str) -> String {
        let (leading, rest) = self.digits.split_at(1);
        let sign = if self.exponent < 0 { '-' } else { '+' };
        let exponent = self.exponent.unsigned_abs();
        if rest.is_empty() {
            format!("{leading}E{sign}{exponent:02}")
        } else {
            format!("{leading}{decimal_separator}{rest}E{sign}{exponent:02}")
        }
    }
}

/// A single number as it is written under a locale. The exponent of the
/// scientific form always uses ASCII `+` and `-`.
pub(crate) struct LocalizedFloat<'a> {
    value: f32,
    specifier: FormatSpecifier,
    locale: &'a Locale,
}

impl<'a> LocalizedFloat<'a> {
    #[must_use]
    pub(crate) const fn new(value: f32, specifier: FormatSpecifier, locale: &'a Locale) -> Self {
        Self { value, specifier, locale }
    }

    #[must_use]
    fn format_finite(&self) -> String {
        let digits = DecimalDigits::shortest(self.value.abs());
        digits.layout(self.specifier.precision(), self.locale.decimal_separator())
    }
}

impl Display for LocalizedFloat<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value.is_nan() {
            return formatter.write_str(self.locale.nan_symbol());
        }
        if self.value.is_infinite() {
            let symbol = if self.value > 0.0 {
                self.locale.positive_infinity_symbol()
            } else {
                self.locale.negative_infinity_symbol()
            };
            return formatter.write_str(symbol);
        }
        if self.value.is_sign_negative() {
            formatter.write_str(self.locale.negative_sign())?;
        }
        formatter.write_str(self.format_finite().as_str())
    }
}

#[must_use]
pub fn format_float(value: f32, specifier: FormatSpecifier, locale: &Locale) -> String {
    LocalizedFloat::new(value, specifier, locale).to_string()
}
