use crate::geom::Point2D;

/// One edge of a ring, from vertex `from` to vertex `to` (1-based, wrapping).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub length: f64,
}

/// Area, perimeter and per-edge lengths of a closed ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub segments: Vec<Segment>,
}

/// Signed shoelace area of an implicitly closed ring (positive when counter-clockwise).
/// Coordinates are taken relative to the first vertex so survey-sized values keep their precision.
pub fn signed_area(ring: &[Point2D]) -> f64 {
    let Some(&o) = ring.first() else { return 0.0 };
    let n = ring.len();
    let mut a = 0.0;
    for i in 0..n {
        let (p, q) = (ring[i] - o, ring[(i + 1) % n] - o);
        a += p.x * q.y - q.x * p.y;
    }
    a / 2.0
}

/// Euclidean distance between two projected points.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f64 { (b.x - a.x).hypot(b.y - a.y) }

/// Compute area, perimeter and segments of a ring. The ring is closed implicitly,
/// so a repeated first point only adds a zero-length edge.
/// Self-intersecting rings are not repaired; the area is the absolute shoelace sum.
pub fn compute_metrics(ring: &[Point2D]) -> RingMetrics {
    debug_assert!(ring.len() >= 3, "ring must have at least 3 points");

    let n = ring.len();
    let segments = (0..n)
        .map(|i| Segment {
            from: i + 1,
            to: (i + 1) % n + 1,
            length: distance(ring[i], ring[(i + 1) % n]),
        })
        .collect::<Vec<_>>();

    RingMetrics {
        area: signed_area(ring).abs(),
        perimeter: segments.iter().map(|s| s.length).sum(),
        segments,
    }
}
