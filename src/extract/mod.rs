//! Extraction of numbered survey coordinate rows from free-form document text.

mod number;

use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;

use crate::geom::Point2D;

pub use number::parse_locale_number;

/// Plausible easting/northing range for the survey CRS, exclusive on both ends.
pub const MIN_COORDINATE: f64 = 100_000.0;
pub const MAX_COORDINATE: f64 = 900_000.0;

/// A point number followed by two coordinates such as `395.482,112` or `532269,41`.
/// The boundary before the point number is ASCII-only, so `Suprafață1 ...` still starts a row.
fn row_regex() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| {
        let coord = r"([0-9]{1,3}\.?[0-9]{3},[0-9]{1,3})";
        Regex::new(&format!(r"(?-u:\b)([0-9]{{1,2}})\s+{coord}\s+{coord}"))
            .expect("coordinate row pattern is valid")
    })
}

#[inline]
fn is_plausible(v: f64) -> bool { v > MIN_COORDINATE && v < MAX_COORDINATE }

/// Scan `text` for coordinate rows and return them keyed by point number.
/// The first occurrence of a point number wins; implausible rows are skipped.
pub fn extract_numbered(text: &str) -> BTreeMap<u8, Point2D> {
    let mut points = BTreeMap::new();
    let mut rows = 0usize;

    for caps in row_regex().captures_iter(text) {
        rows += 1;
        let Ok(number) = caps[1].parse::<u8>() else { continue };
        let (Some(x), Some(y)) = (parse_locale_number(&caps[2]), parse_locale_number(&caps[3])) else { continue };
        if !is_plausible(x) || !is_plausible(y) { continue }

        points.entry(number).or_insert(Point2D { x, y });
    }

    tracing::debug!(rows, points = points.len(), "scanned text for coordinate rows");
    points
}

/// Extract a ring of survey points from document text, ordered by point number.
pub fn extract_points(text: &str) -> Vec<Point2D> {
    extract_numbered(text).into_values().collect()
}
