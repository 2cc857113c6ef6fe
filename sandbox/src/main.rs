use anyhow::Context;
use log::{info, warn};
use strum::IntoEnumIterator;

use vector_math::formatting::vector_formatting::format_ray;
use vector_math::geometry::alias::Vec3F;
use vector_math::geometry::ray::Ray3F;
use vector_math::locale::current::LocaleScope;
use vector_math::locale::known_locale::KnownLocale;
use vector_math::locale::locale::Locale;

const SPECIFIERS: [&str; 2] = ["G", "R"];

const CUSTOM_LOCALE: &str = r#"{
    "name": "pt-BR",
    "list_separator": ";",
    "decimal_separator": ","
}"#;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ray = Ray3F::new(Vec3F::new(1.1, 2.2, 3.3), Vec3F::new(4.4, 5.5, 6.6));

    let custom = Locale::from_json(CUSTOM_LOCALE).context("custom locale description is broken")?;
    let locales = KnownLocale::iter().map(KnownLocale::locale).chain(std::iter::once(custom));

    for locale in locales {
        let _scope = LocaleScope::enter(locale.clone());
        info!("{:>9}: {}", display_name(&locale), ray);

        for specifier in SPECIFIERS {
            let text = format_ray(&ray, Some(specifier), Some(&locale))
                .with_context(|| format!("formatting with '{}' failed", specifier))?;
            info!("{:>9}  {}: {}", "", specifier, text);
        }
    }

    if let Err(error) = format_ray(&ray, Some("X"), None) {
        warn!("as expected: {}", error);
    }

    Ok(())
}

#[must_use]
fn display_name(locale: &Locale) -> &str {
    if locale.name().is_empty() { "invariant" } else { locale.name() }
}
