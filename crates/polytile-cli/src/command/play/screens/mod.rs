pub use self::puzzle::PuzzleScreen;

mod puzzle;
