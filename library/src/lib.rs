#![allow(clippy::bool_comparison)]

pub mod formatting;
pub mod geometry;
pub mod locale;
mod tests;
