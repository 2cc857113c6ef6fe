pub mod current;
pub mod error;
pub mod known_locale;
pub mod locale;
