use polytile_engine::{Board, CellPos, CellState, PlacementPreview};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::{CellDisplay, CellGlyph};

/// Renders the puzzle grid: blocked cells, placed pieces, the hover preview
/// overlay, and the cursor.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    preview: Option<&'a PlacementPreview>,
    cursor: Option<CellPos>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            preview: None,
            cursor: None,
            block: None,
        }
    }

    pub fn preview(self, preview: &'a PlacementPreview) -> Self {
        Self {
            preview: Some(preview),
            ..self
        }
    }

    pub fn cursor(self, cursor: CellPos) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        dim(self.board.grid().cols()) * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        dim(self.board.grid().rows()) * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Classifies the cell at `pos`, preview first so it draws on top of
    /// whatever the board holds there.
    fn glyph_at(&self, pos: CellPos) -> CellGlyph {
        if let Some(preview) = self.preview
            && preview.cells().contains(&pos)
        {
            return if preview.legality().is_legal() {
                CellGlyph::PreviewLegal(preview.shape().kind())
            } else {
                CellGlyph::PreviewIllegal
            };
        }
        match self.board.grid().state_at(pos) {
            Some(CellState::Blocked) => CellGlyph::Blocked,
            Some(CellState::Occupied) => match self.board.piece_at(pos) {
                Some(piece) => CellGlyph::Piece(piece.shape().kind()),
                None => CellGlyph::Empty,
            },
            Some(CellState::Empty) | None => CellGlyph::Empty,
        }
    }
}

fn dim(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn grid_pos(row: usize, col: usize) -> CellPos {
    let row = i16::try_from(row).unwrap_or(i16::MAX);
    let col = i16::try_from(col).unwrap_or(i16::MAX);
    CellPos::new(row, col)
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let grid = self.board.grid();
        let col_constraints = (0..grid.cols()).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..grid.rows()).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        for (row, row_area) in area.layout_vec(&vertical).into_iter().enumerate() {
            for (col, cell_area) in row_area.layout_vec(&horizontal).into_iter().enumerate() {
                let pos = grid_pos(row, col);
                let mut cell = CellDisplay::from_glyph(self.glyph_at(pos), true);
                if self.cursor == Some(pos) {
                    cell = cell.cursor();
                }
                cell.render(cell_area, buf);
            }
        }
    }
}
