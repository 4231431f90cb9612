/// Parse a number written with `.` as thousands separator and `,` as decimal separator,
/// e.g. `395.482,112` -> 395482.112.
pub fn parse_locale_number(s: &str) -> Option<f64> {
    let normalized = s.trim().replace('.', "").replacen(',', ".", 1);
    if normalized.is_empty() { return None }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_and_decimal_separators() {
        assert_eq!(parse_locale_number("241.953,403"), Some(241953.403));
        assert_eq!(parse_locale_number("532269,41"), Some(532269.41));
        assert_eq!(parse_locale_number("1.234.567,5"), Some(1234567.5));
    }

    #[test]
    fn integers_and_padding() {
        assert_eq!(parse_locale_number(" 500.000 "), Some(500000.0));
        assert_eq!(parse_locale_number("12"), Some(12.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_locale_number(""), None);
        assert_eq!(parse_locale_number("."), None);
        assert_eq!(parse_locale_number("12,5,3"), None);
        assert_eq!(parse_locale_number("abc"), None);
    }
}
