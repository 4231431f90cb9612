use crate::geom::Segment;
use crate::terrain::{GeoPoint, Terrain};

impl GeoPoint {
    /// Popup text for a ring vertex marker.
    pub fn popup_text(&self, terrain_name: &str) -> String {
        format!(
            "{terrain_name} \u{2014} Punct {}\nStereo 70: {:.3} / {:.3}\nWGS84: {:.6}\u{b0} N, {:.6}\u{b0} E",
            self.index, self.x, self.y, self.lat, self.lng,
        )
    }
}

/// Edge label such as `1→2: 100.00m`.
pub fn segment_label(segment: &Segment) -> String {
    format!("{}\u{2192}{}: {:.2}m", segment.from, segment.to, segment.length)
}

impl Terrain {
    /// Area rounded to whole square meters, e.g. `10000 mp`.
    pub fn area_label(&self) -> String { format!("{} mp", self.area().round()) }

    /// Perimeter to one decimal, e.g. `400.0 m`.
    pub fn perimeter_label(&self) -> String { format!("{:.1} m", self.perimeter()) }

    /// Text card for the terrain list: stats, segments and the geographic coordinate table.
    pub fn listing(&self) -> String {
        let segments = self.segments().iter().map(segment_label).collect::<Vec<_>>().join(" ");

        let mut out = String::new();
        out.push_str(&format!("[{}] {} ({})\n", self.id(), self.name(), self.color()));
        out.push_str(&format!("Area: {}\n", self.area_label()));
        out.push_str(&format!("Perimeter: {}\n", self.perimeter_label()));
        out.push_str(&format!("Segments: {segments}\n"));
        out.push_str("#\tLatitude\tLongitude\n");
        for p in self.geo_points() {
            out.push_str(&format!("{}\t{:.6}\t{:.6}\n", p.index, p.lat, p.lng));
        }
        out
    }
}
