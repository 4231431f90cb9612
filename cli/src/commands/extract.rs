use anyhow::{bail, Result};
use stereoparcel::TextFile;

use crate::cli::{Cli, ExtractArgs};

pub fn run(cli: &Cli, args: &ExtractArgs) -> Result<()> {
    let mut registry = super::registry(cli)?;

    let summary = registry.import_documents(args.documents.iter().map(TextFile::new));
    for failure in &summary.failed {
        eprintln!("[extract] {}: {}", failure.document, failure.reason);
    }
    eprintln!("{}", summary.status_message());

    if summary.added.is_empty() { bail!("no terrain could be extracted") }
    super::report(&registry, args.geojson.as_deref())
}
