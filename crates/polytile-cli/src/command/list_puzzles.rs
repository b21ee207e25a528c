use std::path::PathBuf;

use polytile_engine::PieceSet;

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ListPuzzlesArg {
    /// Path to a JSON catalog file (defaults to the built-in catalog)
    #[clap(long)]
    catalog: Option<PathBuf>,
}

pub(crate) fn run(arg: &ListPuzzlesArg) -> anyhow::Result<()> {
    let ListPuzzlesArg { catalog } = arg;
    let catalog = util::load_catalog(catalog.as_deref())?;

    println!(
        "{:<14} {:<18} {:>5} {:>7} {:>6}  PIECES",
        "ID", "NAME", "SIZE", "BLOCKED", "TARGET",
    );
    for puzzle in catalog.puzzles() {
        let size = format!("{}x{}", puzzle.rows(), puzzle.cols());
        let pieces = match puzzle.pieces() {
            PieceSet::Dominoes => "dominoes",
            PieceSet::TTetrominoes => "t-tetrominoes",
        };
        println!(
            "{:<14} {:<18} {:>5} {:>7} {:>6}  {}",
            puzzle.id(),
            puzzle.name(),
            size,
            puzzle.blocked_cells().len(),
            puzzle.target_piece_count(),
            pieces,
        );
    }
    Ok(())
}
