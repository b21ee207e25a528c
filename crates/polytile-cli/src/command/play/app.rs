use crossterm::event::Event;
use polytile_engine::PuzzleSession;
use ratatui::Frame;

use crate::{command::play::screens::PuzzleScreen, tui::App};

#[derive(Debug)]
pub struct PlayApp {
    screen: PuzzleScreen,
}

impl PlayApp {
    pub fn new(session: PuzzleSession) -> Self {
        Self {
            screen: PuzzleScreen::new(session),
        }
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
