use std::path::PathBuf;

use polytile_engine::PuzzleSession;

use crate::{command::play::app::PlayApp, tui::Tui, util};

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path to a JSON catalog file (defaults to the built-in catalog)
    #[clap(long)]
    catalog: Option<PathBuf>,
    /// Id of the puzzle to start with
    #[clap(long)]
    puzzle: Option<String>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { catalog, puzzle } = arg;

    let catalog = util::load_catalog(catalog.as_deref())?;
    let session = match puzzle {
        Some(id) => PuzzleSession::with_start(catalog, id)?,
        None => PuzzleSession::new(catalog),
    };

    let mut app = PlayApp::new(session);
    Tui::new().run(&mut app)?;

    Ok(())
}
