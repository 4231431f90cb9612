use geo::{Coord, Rect};

use crate::geom::{Point2D, Projector};
use crate::terrain::{validate_ring, Terrain, TerrainError, TerrainId};

/// Colors handed out to terrains in creation order.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#e74c3c", "#2980b9", "#27ae60", "#f39c12",
    "#8e44ad", "#16a085", "#d35400", "#2c3e50",
    "#c0392b", "#1abc9c", "#e67e22", "#3498db",
];

/// Owns all terrains of a session and assigns their ids and colors.
///
/// Mutating operations take `&mut self`; hosts that share a registry between
/// threads wrap it in a `Mutex` so that id/color assignment and insertion stay atomic.
#[derive(Debug)]
pub struct Registry {
    projector: Projector,
    palette: Vec<String>,
    terrains: Vec<Terrain>, // insertion order
    next_id: TerrainId,
    color_cursor: usize,
}

impl Registry {
    /// Create an empty registry using the default palette.
    pub fn new(projector: Projector) -> Self {
        Self::with_palette(projector, DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Create an empty registry with a custom palette (the default one if `palette` is empty).
    pub fn with_palette(projector: Projector, palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            palette
        };

        Self { projector, palette, terrains: Vec::new(), next_id: 1, color_cursor: 0 }
    }

    #[inline] pub fn projector(&self) -> &Projector { &self.projector }

    #[inline] pub fn palette(&self) -> &[String] { &self.palette }

    /// Id the next successful `add` will assign.
    #[inline] pub fn next_id(&self) -> TerrainId { self.next_id }

    /// Number of colors handed out since creation or the last `clear`.
    #[inline] pub fn color_cursor(&self) -> usize { self.color_cursor }

    #[inline] pub fn len(&self) -> usize { self.terrains.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.terrains.is_empty() }

    /// All terrains, in creation order.
    #[inline] pub fn list(&self) -> &[Terrain] { &self.terrains }

    /// Look up a terrain by id.
    pub fn get(&self, id: TerrainId) -> Option<&Terrain> {
        self.terrains.iter().find(|t| t.id() == id)
    }

    /// Validate, project and measure a ring, then register it as a new terrain.
    /// On rejection the registry is left untouched.
    pub fn add(&mut self, name: impl Into<String>, points: Vec<Point2D>) -> Result<&Terrain, TerrainError> {
        let name = name.into();
        validate_ring(&points)?;

        let projected = points.iter()
            .map(|&p| self.projector.project(p))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| TerrainError::Projection(format!("{e:#}")))?;

        let id = self.next_id;
        let color = self.palette[self.color_cursor % self.palette.len()].clone();
        self.next_id += 1;
        self.color_cursor += 1;

        let terrain = Terrain::new(id, name, color, points, projected);
        tracing::info!(
            id,
            name = terrain.name(),
            points = terrain.points().len(),
            area = terrain.area(),
            "added terrain"
        );

        self.terrains.push(terrain);
        Ok(&self.terrains[self.terrains.len() - 1])
    }

    /// Register a manually entered ring, named after its position in the list.
    pub fn add_manual(&mut self, points: Vec<Point2D>) -> Result<&Terrain, TerrainError> {
        let name = format!("Teren manual #{}", self.terrains.len() + 1);
        self.add(name, points)
    }

    /// Remove a terrain. Returns whether it was present; ids and colors are never reused.
    pub fn remove(&mut self, id: TerrainId) -> bool {
        let Some(idx) = self.terrains.iter().position(|t| t.id() == id) else { return false };
        self.terrains.remove(idx);
        tracing::info!(id, "removed terrain");
        true
    }

    /// Remove all terrains and restart the color cycle. Ids keep increasing.
    pub fn clear(&mut self) {
        tracing::info!(count = self.terrains.len(), "cleared terrains");
        self.terrains.clear();
        self.color_cursor = 0;
    }

    /// Geographic bounding box of all terrains (lng as x, lat as y), for fitting a map view.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.terrains.iter()
            .filter_map(|t| t.bounds())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }
}
