use std::{fs::File, io, path::Path};

use anyhow::Context as _;
use polytile_engine::{PuzzleCatalog, PuzzleSpec};

/// Loads a catalog from a JSON file, or returns the built-in catalog when no
/// path is given.
///
/// The file holds an array of puzzle definitions; the whole array is
/// validated before any puzzle is used.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<PuzzleCatalog> {
    let Some(path) = path else {
        return Ok(PuzzleCatalog::builtin());
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    let specs: Vec<PuzzleSpec> = serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog JSON file: {}", path.display()))?;
    let catalog = PuzzleCatalog::new(specs)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))?;

    Ok(catalog)
}
