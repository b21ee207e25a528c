use crossterm::event::{Event, KeyCode};
use polytile_engine::{CellPos, PuzzleSession};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::ui::widgets::SessionDisplay;

#[derive(Debug)]
pub struct PuzzleScreen {
    session: PuzzleSession,
    cursor: CellPos,
    is_exiting: bool,
}

impl PuzzleScreen {
    pub fn new(session: PuzzleSession) -> Self {
        let mut screen = Self {
            session,
            cursor: CellPos::new(0, 0),
            is_exiting: false,
        };
        screen.session.hover_cell(screen.cursor);
        screen
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let session_display = SessionDisplay::new(&self.session, self.cursor);
        let help_text = "Controls: ← ↑ ↓ → (Move) | Tab (Cycle) | 1-4 (Select) | Enter (Place) | U (Undo) | R (Redo) | C (Deselect) | N P (Puzzle) | Home (Reset) | Q (Quit)";
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Tab => self.session.cycle_piece(),
                KeyCode::Char('1') => self.select_shape(0),
                KeyCode::Char('2') => self.select_shape(1),
                KeyCode::Char('3') => self.select_shape(2),
                KeyCode::Char('4') => self.select_shape(3),
                KeyCode::Enter | KeyCode::Char(' ') => _ = self.session.place_at(self.cursor),
                KeyCode::Char('u') => _ = self.session.undo(),
                KeyCode::Char('r') => _ = self.session.redo(),
                KeyCode::Char('c') | KeyCode::Esc => self.session.clear_selection(),
                KeyCode::Char('n') => {
                    self.session.next_puzzle();
                    self.reset_cursor();
                }
                KeyCode::Char('p') => {
                    self.session.previous_puzzle();
                    self.reset_cursor();
                }
                KeyCode::Home => self.session.reset(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    /// Moves the cursor by one cell, staying inside the grid.
    fn move_cursor(&mut self, d_row: i16, d_col: i16) {
        let next = self.cursor.offset(d_row, d_col);
        if self.session.board().grid().contains(next) {
            self.cursor = next;
            self.session.hover_cell(next);
        }
    }

    fn select_shape(&mut self, index: usize) {
        let shapes = self.session.puzzle().pieces().shapes();
        if let Some(&shape) = shapes.get(index) {
            self.session.select_piece(shape);
        }
    }

    // Puzzle switches can shrink the grid, so the cursor snaps back to the
    // origin rather than being clamped.
    fn reset_cursor(&mut self) {
        self.cursor = CellPos::new(0, 0);
        self.session.hover_cell(self.cursor);
    }
}
