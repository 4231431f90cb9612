// End-to-end checks through the public API: manual entry, document import,
// registry bookkeeping and the display/export payloads.

use stereoparcel::{
    parse_manual_points, Point2D, Projector, Registry, TerrainError, TextFile,
};

fn plot_a() -> Vec<Point2D> {
    vec![
        Point2D { x: 500000.0, y: 500000.0 },
        Point2D { x: 500100.0, y: 500000.0 },
        Point2D { x: 500100.0, y: 500100.0 },
        Point2D { x: 500000.0, y: 500100.0 },
    ]
}

#[test]
fn plot_near_projection_origin() {
    let mut registry = Registry::new(Projector::stereo70().unwrap());
    let terrain = registry.add("Plot A", plot_a()).unwrap();

    assert!((terrain.area() - 10000.0).abs() < 1e-6);
    assert!((terrain.perimeter() - 400.0).abs() < 1e-9);
    assert_eq!(terrain.geo_points().len(), 4);
    for p in terrain.geo_points() {
        assert!((p.lat - 46.0).abs() < 0.01, "lat = {}", p.lat);
        assert!((p.lng - 25.0).abs() < 0.01, "lng = {}", p.lng);
    }
    assert_eq!(registry.list().len(), 1);
}

#[test]
fn manual_entry_to_terrain() {
    let rows = [
        ("500,000", "500,000.0"),
        ("500,100", "500,000"),
        ("500,100", "500,100"),
        ("500,000", "500,100"),
    ];
    let points = parse_manual_points(&rows).unwrap();

    let mut registry = Registry::new(Projector::stereo70().unwrap());
    let terrain = registry.add_manual(points).unwrap();
    assert_eq!(terrain.name(), "Teren manual #1");
    assert_eq!(terrain.area_label(), "10000 mp");
    assert_eq!(terrain.perimeter_label(), "400.0 m");
}

#[test]
fn two_point_manual_entry_is_rejected_without_side_effects() {
    let points = parse_manual_points(&[("500000", "500000"), ("500100", "500000")]).unwrap();

    let mut registry = Registry::new(Projector::stereo70().unwrap());
    let before = (registry.next_id(), registry.color_cursor(), registry.len());
    assert_eq!(registry.add_manual(points).unwrap_err(), TerrainError::TooFewPoints { count: 2 });
    assert_eq!((registry.next_id(), registry.color_cursor(), registry.len()), before);
}

#[test]
fn text_documents_import_in_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("CF 5012.txt");
    std::fs::write(
        &good,
        "EXTRAS DE CARTE FUNCIARA\n\x0cNr. pct. X [m] Y [m]\n\
         3 500.100,000 500.100,000\n1 500.000,000 500.000,000\n\
         2 500.100,000 500.000,000\n4 500.000,000 500.100,000\n\
         Suprafata masurata: 10.000 mp\n",
    ).unwrap();
    let empty = dir.path().join("notes.txt");
    std::fs::write(&empty, "nothing to see here").unwrap();
    let missing = dir.path().join("missing.txt");

    let mut registry = Registry::new(Projector::stereo70().unwrap());
    let summary = registry.import_documents([TextFile::new(&good), TextFile::new(&empty), TextFile::new(&missing)]);

    assert_eq!(summary.added.len(), 1);
    assert_eq!(summary.failed.len(), 2);

    let terrain = registry.get(summary.added[0]).unwrap();
    assert_eq!(terrain.name(), "CF 5012");
    assert_eq!(terrain.points(), plot_a().as_slice());
    assert!((terrain.area() - 10000.0).abs() < 1e-6);

    let geojson = registry.to_geojson();
    assert_eq!(geojson["features"][0]["properties"]["name"], "CF 5012");
}

#[test]
fn clear_restarts_colors_but_not_ids() {
    let mut registry = Registry::new(Projector::stereo70().unwrap());
    let first = registry.add("A", plot_a()).unwrap().clone();
    registry.add("B", plot_a()).unwrap();

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.bounds().is_none());

    let again = registry.add("C", plot_a()).unwrap();
    assert_eq!(again.color(), first.color());
    assert!(again.id() > first.id() + 1);
}
