#[cfg(test)]
pub(crate) mod tests {
    use crate::formatting::parsing::parse_float;
    use crate::locale::locale::Locale;
    use more_asserts::assert_gt;
    use std::fmt::Write;

    /// Splits `text` the way a consumer that only knows the list separator
    /// would, dropping empty pieces.
    #[must_use]
    pub(crate) fn split_number_list<'a>(text: &'a str, locale: &Locale) -> Vec<&'a str> {
        text.split(locale.list_separator()).filter(|token| !token.is_empty()).collect()
    }

    pub(crate) fn assert_number_list(text: &str, locale: &Locale, expected: &[f32]) {
        let tokens = split_number_list(text, locale);
        assert_eq!(tokens.len(), expected.len(), "unexpected token count in {:?}", text);

        let mut buffer = String::new();
        for (i, (token, expected)) in tokens.iter().zip(expected.iter()).enumerate() {
            assert_gt!(token.trim().len(), 0, "empty token at index {}", i);
            if false == token.contains(locale.decimal_separator()) {
                writeln!(&mut buffer, "token {:?} at index {} lacks decimal separator {:?}", token, i, locale.decimal_separator()).unwrap();
                continue;
            }
            match parse_float(token, Some(locale)) {
                Ok(actual) if actual.to_bits() == expected.to_bits() => {}
                Ok(actual) => writeln!(&mut buffer, "token at index {} differs: {} vs {}", i, actual, expected).unwrap(),
                Err(error) => writeln!(&mut buffer, "token at index {} does not parse: {}", i, error).unwrap(),
            }
        }

        if !buffer.is_empty() {
            panic!("{}", buffer);
        }
    }
}
