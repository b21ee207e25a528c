use polytile_engine::{CellPos, PuzzleSession};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Widget},
};

use crate::ui::widgets::{BoardDisplay, PaletteDisplay, ProgressDisplay, color, style};

/// Renders a whole puzzle session: the board with preview and cursor in the
/// center, the piece palette on the right, progress on the left.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a PuzzleSession,
    cursor: CellPos,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a PuzzleSession, cursor: CellPos) -> Self {
        Self { session, cursor }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let border_style = if self.session.is_target_reached() {
            color::GREEN
        } else {
            color::WHITE
        };

        let preview = self.session.preview();
        let board = {
            let widget = BoardDisplay::new(self.session.board())
                .cursor(self.cursor)
                .block(
                    Block::bordered()
                        .title(Line::from(self.session.puzzle().name()).centered())
                        .border_style(border_style)
                        .style(style),
                );
            match &preview {
                Some(preview) => widget.preview(preview),
                None => widget,
            }
        };
        let palette = PaletteDisplay::new(
            self.session.puzzle().pieces().shapes(),
            self.session.selected_piece(),
        );
        let progress = ProgressDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("PROGRESS").centered())
                .border_style(border_style)
                .style(style),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(progress.width()),
            Constraint::Length(board.width()),
            Constraint::Length(palette.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [progress_area] =
            Layout::vertical([Constraint::Length(progress.height())]).areas(left_column);
        let [board_area] = Layout::vertical([Constraint::Length(board.height())])
            .flex(Flex::Center)
            .areas(center_column);
        let [palette_area] = Layout::vertical([Constraint::Length(palette.height())])
            .flex(Flex::Center)
            .areas(right_column);

        progress.render(progress_area, buf);
        board.render(board_area, buf);
        palette.render(palette_area, buf);
    }
}
