use crate::formatting::error::FormatError;
use crate::formatting::vector_formatting::with_locale;
use crate::geometry::alias::Vec3F;
use crate::geometry::ray::Ray3F;
use crate::locale::locale::Locale;

/// Reads one number written under a locale. Surrounding whitespace is
/// ignored, as is a leading `+`.
pub fn parse_float(text: &str, locale: Option<&Locale>) -> Result<f32, FormatError> {
    with_locale(locale, |locale| parse_localized_float(text, locale))
}

pub fn parse_vector(text: &str, locale: Option<&Locale>) -> Result<Vec3F, FormatError> {
    let [x, y, z] = with_locale(locale, |locale| parse_fields::<3>(text, locale))?;
    Ok(Vec3F::new(x, y, z))
}

/// Inverse of [`crate::formatting::vector_formatting::format_ray`].
pub fn parse_ray(text: &str, locale: Option<&Locale>) -> Result<Ray3F, FormatError> {
    let [ox, oy, oz, dx, dy, dz] = with_locale(locale, |locale| parse_fields::<6>(text, locale))?;
    Ok(Ray3F::new(Vec3F::new(ox, oy, oz), Vec3F::new(dx, dy, dz)))
}

fn parse_fields<const COUNT: usize>(text: &str, locale: &Locale) -> Result<[f32; COUNT], FormatError> {
    let fields: Vec<&str> = text.split(locale.number_list_separator()).collect();
    if fields.len() != COUNT {
        return Err(FormatError::FieldCount { expected: COUNT, actual: fields.len() });
    }

    let mut values = [0.0; COUNT];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = parse_localized_float(field, locale)?;
    }
    Ok(values)
}

fn parse_localized_float(text: &str, locale: &Locale) -> Result<f32, FormatError> {
    let malformed = || FormatError::MalformedNumber { text: text.to_string() };
    let trimmed = text.trim();

    if trimmed == locale.nan_symbol() {
        return Ok(f32::NAN);
    }
    if trimmed == locale.positive_infinity_symbol() {
        return Ok(f32::INFINITY);
    }
    if trimmed == locale.negative_infinity_symbol() {
        return Ok(f32::NEG_INFINITY);
    }

    let (negative, magnitude) = match trimmed.strip_prefix(locale.negative_sign()) {
        Some(magnitude) => (true, magnitude),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let normalized = normalize_magnitude(magnitude, locale.decimal_separator()).ok_or_else(malformed)?;
    let value = normalized.parse::<f32>().map_err(|_| malformed())?;

    Ok(if negative { -value } else { value })
}

/// Rewrites the locale's decimal separator as `.` and rejects anything that
/// is not a plain unsigned decimal or scientific number.
#[must_use]
fn normalize_magnitude(magnitude: &str, decimal_separator: &str) -> Option<String> {
    if decimal_separator != "." && magnitude.contains('.') {
        return None;
    }

    let normalized = magnitude.replacen(decimal_separator, ".", 1);
    let starts_with_digit = normalized.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    let plain = normalized.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));

    (starts_with_digit && plain).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::float_formatting::format_float;
    use crate::formatting::format_specifier::FormatSpecifier;
    use crate::formatting::vector_formatting::format_ray;
    use crate::locale::current::LocaleScope;
    use crate::locale::known_locale::KnownLocale;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(KnownLocale::Invariant,      "1.5",        1.5)]
    #[case(KnownLocale::Invariant,      " -2.25 ",   -2.25)]
    #[case(KnownLocale::Invariant,      "+4",         4.0)]
    #[case(KnownLocale::Invariant,      "1.5E+03",    1500.0)]
    #[case(KnownLocale::Invariant,      "2E-05",      2e-5)]
    #[case(KnownLocale::GermanGermany,  "1,5",        1.5)]
    #[case(KnownLocale::French,         "-0,125",    -0.125)]
    #[case(KnownLocale::DutchNetherlands, "3,5E-09",  3.5e-9)]
    fn test_parse_float(#[case] locale: KnownLocale, #[case] text: &str, #[case] expected: f32) {
        assert_eq!(parse_float(text, Some(&locale.locale())), Ok(expected));
    }

    #[rstest]
    #[case(KnownLocale::Invariant,     "")]
    #[case(KnownLocale::Invariant,     "abc")]
    #[case(KnownLocale::Invariant,     "1,5")]
    #[case(KnownLocale::Invariant,     "--1")]
    #[case(KnownLocale::Invariant,     "inf")]
    #[case(KnownLocale::Invariant,     "nan")]
    #[case(KnownLocale::GermanGermany, "1.5")]
    #[case(KnownLocale::GermanGermany, "1,5,0")]
    fn test_parse_float_malformed(#[case] locale: KnownLocale, #[case] text: &str) {
        let expected = Err(FormatError::MalformedNumber { text: text.to_string() });
        assert_eq!(parse_float(text, Some(&locale.locale())), expected);
    }

    #[test]
    fn test_parse_non_finite() {
        let locale = Locale::invariant();

        assert!(parse_float("NaN", Some(&locale)).unwrap().is_nan());
        assert_eq!(parse_float("Infinity", Some(&locale)), Ok(f32::INFINITY));
        assert_eq!(parse_float("-Infinity", Some(&locale)), Ok(f32::NEG_INFINITY));
    }

    #[test]
    fn test_parse_negative_zero_keeps_sign() {
        let actual = parse_float("-0", Some(&Locale::invariant())).unwrap();
        assert_eq!(actual.to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_parse_uses_current_locale() {
        let _scope = LocaleScope::enter(KnownLocale::French);
        assert_eq!(parse_float("0,75", None), Ok(0.75));
        assert_eq!(parse_vector("1,5; 2; -3,25", None), Ok(Vec3F::new(1.5, 2.0, -3.25)));
    }

    #[test]
    fn test_parse_vector_field_count() {
        let actual = parse_vector("1, 2", Some(&Locale::invariant()));
        assert_eq!(actual, Err(FormatError::FieldCount { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_parse_ray_field_count() {
        let actual = parse_ray("1, 2, 3, 4, 5, 6, 7", Some(&Locale::invariant()));
        assert_eq!(actual, Err(FormatError::FieldCount { expected: 6, actual: 7 }));
    }

    #[test]
    fn test_parse_ray_inverts_format_ray() {
        let expected = Ray3F::new(Vec3F::new(-1.25e-7, 3.0e12, 0.1), Vec3F::new(f32::MAX, -0.0, 7.0));

        for known in KnownLocale::iter() {
            let locale = known.locale();
            let text = format_ray(&expected, Some("R"), Some(&locale)).unwrap();
            let actual = parse_ray(text.as_str(), Some(&locale)).unwrap();

            assert_eq!(actual, expected, "locale {:?}, text {:?}", known, text);
            assert_eq!(actual.direction().y.to_bits(), expected.direction().y.to_bits());
        }
    }

    #[test]
    fn test_parse_ray_inverts_format_ray_for_custom_locale() {
        let locale = Locale::from_json(r#"{"list_separator": "|", "decimal_separator": ",", "negative_sign": "−", "nan_symbol": "n/a"}"#).unwrap();
        let expected = Ray3F::new(Vec3F::new(-1.5, 2.5, -std::f32::consts::PI), Vec3F::new(1e-7, -0.0, 4.25));

        for specifier in [None, Some("G"), Some("R")] {
            let text = format_ray(&expected, specifier, Some(&locale)).unwrap();
            assert!(text.starts_with("\u{2212}1,5| 2,5| "), "{:?}", text);

            let actual = parse_ray(text.as_str(), Some(&locale)).unwrap();
            assert_eq!(actual, expected);
            assert_eq!(actual.origin().z.to_bits(), expected.origin().z.to_bits());
            assert_eq!(actual.direction().y.to_bits(), expected.direction().y.to_bits());
        }
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        let samples = [
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::EPSILON,
            1.0 / 3.0,
            std::f32::consts::PI,
            -std::f32::consts::E,
            1e-45,
            123456.79,
            -0.0,
        ];

        for known in KnownLocale::iter() {
            let locale = known.locale();
            for sample in samples {
                for specifier in [FormatSpecifier::General, FormatSpecifier::RoundTrip] {
                    let text = format_float(sample, specifier, &locale);
                    let actual = parse_float(text.as_str(), Some(&locale)).unwrap();
                    assert_eq!(actual.to_bits(), sample.to_bits(), "locale {:?}, text {:?}", known, text);
                }
            }
        }
    }
}
