use anyhow::{anyhow, Result};
use stereoparcel::parse_manual_points;

use crate::cli::{Cli, PointsArgs};

pub fn run(cli: &Cli, args: &PointsArgs) -> Result<()> {
    let rows = args.points.chunks(2)
        .map(|pair| (pair[0].as_str(), pair.get(1).map_or("", String::as_str)))
        .collect::<Vec<_>>();

    let points = parse_manual_points(&rows).map_err(|e| {
        let fields = e.invalid.iter()
            .map(|(row, axis)| format!("point {row} {axis:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("{e} ({fields})")
    })?;

    let mut registry = super::registry(cli)?;
    match &args.name {
        Some(name) => registry.add(name.as_str(), points)?,
        None => registry.add_manual(points)?,
    };

    super::report(&registry, args.geojson.as_deref())
}
