use clap::{Parser, Subcommand};

use self::{list_puzzles::ListPuzzlesArg, play::PlayArg};

mod list_puzzles;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play puzzles interactively (default)
    Play(#[clap(flatten)] PlayArg),
    /// List the puzzles in the catalog
    ListPuzzles(#[clap(flatten)] ListPuzzlesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::ListPuzzles(arg) => list_puzzles::run(&arg)?,
    }
    Ok(())
}
