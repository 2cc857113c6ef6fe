use crate::formatting::error::FormatError;
use crate::formatting::float_formatting::LocalizedFloat;
use crate::formatting::format_specifier::FormatSpecifier;
use crate::geometry::alias::Vec3F;
use crate::geometry::axis::Axis;
use crate::geometry::ray::Ray3F;
use crate::locale::current::with_current_locale;
use crate::locale::locale::Locale;
use strum::IntoEnumIterator;

/// Writes `X{sep} Y{sep} Z`, where `{sep}` is the locale's number list
/// separator. `None` as locale stands for the current locale of the
/// calling thread; `None` or `""` as specifier means "G".
pub fn format_vector(target: Vec3F, specifier: Option<&str>, locale: Option<&Locale>) -> Result<String, FormatError> {
    let specifier = FormatSpecifier::parse(specifier)?;
    Ok(with_locale(locale, |locale| format_three_dee_vector(target, specifier, locale)))
}

/// Writes the origin and then the direction as one flat list of six
/// numbers; the same separator sits between every pair of neighbours.
pub fn format_ray(target: &Ray3F, specifier: Option<&str>, locale: Option<&Locale>) -> Result<String, FormatError> {
    let specifier = FormatSpecifier::parse(specifier)?;
    Ok(with_locale(locale, |locale| {
        let origin = format_three_dee_vector(target.origin(), specifier, locale);
        let direction = format_three_dee_vector(target.direction(), specifier, locale);
        format!("{origin}{}{direction}", field_separator(locale))
    }))
}

pub(crate) fn with_locale<Output, Action: FnOnce(&Locale) -> Output>(explicit: Option<&Locale>, action: Action) -> Output {
    match explicit {
        Some(locale) => action(locale),
        None => with_current_locale(action),
    }
}

#[must_use]
fn field_separator(locale: &Locale) -> String {
    format!("{} ", locale.number_list_separator())
}

#[must_use]
fn format_three_dee_vector(target: Vec3F, specifier: FormatSpecifier, locale: &Locale) -> String {
    Axis::iter()
        .map(|axis| LocalizedFloat::new(target[axis.as_index()], specifier, locale).to_string())
        .collect::<Vec<String>>()
        .join(field_separator(locale).as_str())
}
