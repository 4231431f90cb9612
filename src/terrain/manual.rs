use std::fmt;

use crate::geom::Point2D;

/// Coordinate axis of a manual entry field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis { X, Y }

/// Every field of a manual entry that failed to parse, as (1-based row, axis).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualEntryError {
    pub invalid: Vec<(usize, Axis)>,
}

impl fmt::Display for ManualEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) are not numbers; all fields must be numeric", self.invalid.len())
    }
}

impl std::error::Error for ManualEntryError {}

/// Parse one manually typed coordinate. Commas are thousands separators and `.` is the
/// decimal point, e.g. `241,953.403`.
pub fn parse_manual_field(s: &str) -> Option<f64> {
    s.replace(',', "").trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse rows of manually typed (x, y) fields into a ring.
/// All invalid fields are reported together; a single failure rejects the entry.
pub fn parse_manual_points<S: AsRef<str>>(rows: &[(S, S)]) -> Result<Vec<Point2D>, ManualEntryError> {
    let mut points = Vec::with_capacity(rows.len());
    let mut invalid = Vec::new();

    for (i, (x, y)) in rows.iter().enumerate() {
        let x = parse_manual_field(x.as_ref());
        let y = parse_manual_field(y.as_ref());
        if x.is_none() { invalid.push((i + 1, Axis::X)) }
        if y.is_none() { invalid.push((i + 1, Axis::Y)) }
        if let (Some(x), Some(y)) = (x, y) { points.push(Point2D { x, y }) }
    }

    if invalid.is_empty() { Ok(points) } else { Err(ManualEntryError { invalid }) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_accept_thousands_commas_and_padding() {
        assert_eq!(parse_manual_field("241953.403"), Some(241953.403));
        assert_eq!(parse_manual_field(" 532,269.41 "), Some(532269.41));
        assert_eq!(parse_manual_field("-12"), Some(-12.0));
    }

    #[test]
    fn fields_reject_empty_and_non_numeric() {
        assert_eq!(parse_manual_field(""), None);
        assert_eq!(parse_manual_field("   "), None);
        assert_eq!(parse_manual_field("12a"), None);
        assert_eq!(parse_manual_field("NaN"), None);
        assert_eq!(parse_manual_field("inf"), None);
    }

    #[test]
    fn rows_parse_in_order() {
        let rows = [("241953.403", "532269.41"), ("241990", "532281"), ("242003.5", "532240")];
        let points = parse_manual_points(&rows).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point2D { x: 241953.403, y: 532269.41 });
        assert_eq!(points[2], Point2D { x: 242003.5, y: 532240.0 });
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let rows = [
            ("241953.403".to_string(), "".to_string()),
            ("x".to_string(), "532281".to_string()),
            ("1".to_string(), "2".to_string()),
        ];
        let err = parse_manual_points(&rows).unwrap_err();
        assert_eq!(err.invalid, vec![(1, Axis::Y), (2, Axis::X)]);
    }

    #[test]
    fn too_few_rows_is_not_a_parse_error() {
        let rows: [(&str, &str); 2] = [("1", "2"), ("3", "4")];
        assert_eq!(parse_manual_points(&rows).unwrap().len(), 2);
    }
}
