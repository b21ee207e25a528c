use std::iter;

use polytile_engine::{PieceSet, PuzzleSession};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Renders the progress panel: puzzle identity, placement progress toward
/// the target, and history availability.
pub struct ProgressDisplay<'a> {
    session: &'a PuzzleSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ProgressDisplay<'a> {
    pub fn new(session: &'a PuzzleSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&PuzzleSession) -> String),
    LabelValue(&'static str, &'static dyn Fn(&PuzzleSession) -> String),
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_owned()
}

const ROWS: &[Row] = &[
    Row::FullLabel("PUZZLE:"),
    Row::FullValue(&|session| session.puzzle().id().to_owned()),
    Row::LabelValue("PIECES:", &|session| {
        match session.puzzle().pieces() {
            PieceSet::Dominoes => "dominoes",
            PieceSet::TTetrominoes => "T's",
        }
        .to_owned()
    }),
    Row::Empty,
    Row::LabelValue("PLACED:", &|session| {
        format!("{}/{}", session.placed_count(), session.target_count())
    }),
    Row::LabelValue("DONE:", &|session| yes_no(session.is_target_reached())),
    Row::Empty,
    Row::LabelValue("UNDO:", &|session| yes_no(session.can_undo())),
    Row::LabelValue("REDO:", &|session| yes_no(session.can_redo())),
];

impl Widget for ProgressDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let row_areas = Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), row_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
