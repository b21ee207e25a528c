use polytile_engine::PieceShape;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, CellGlyph};

/// Cells per side of the box a shape is drawn in. Every domino orientation
/// and T-tetromino rotation fits in 3x3.
const BOX_CELLS: u16 = 3;

/// Renders one shape, centered in a fixed-size box.
#[derive(Debug)]
pub struct ShapeDisplay<'a> {
    shape: Option<PieceShape>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ShapeDisplay<'a> {
    pub fn new() -> Self {
        Self {
            shape: None,
            block: None,
        }
    }

    pub fn shape(self, shape: PieceShape) -> Self {
        Self {
            shape: Some(shape),
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
        BOX_CELLS * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        BOX_CELLS * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Default for ShapeDisplay<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// The shape's offsets shifted into box coordinates, centered in the box.
fn box_cells(shape: PieceShape) -> Vec<(i16, i16)> {
    let offsets = shape.offsets();
    let min_row = offsets.iter().map(|o| o.0).min().unwrap_or(0);
    let max_row = offsets.iter().map(|o| o.0).max().unwrap_or(0);
    let min_col = offsets.iter().map(|o| o.1).min().unwrap_or(0);
    let max_col = offsets.iter().map(|o| o.1).max().unwrap_or(0);

    #[expect(clippy::cast_possible_wrap)]
    let box_cells = BOX_CELLS as i16;
    let pad_row = (box_cells - (max_row - min_row + 1)) / 2;
    let pad_col = (box_cells - (max_col - min_col + 1)) / 2;

    offsets
        .iter()
        .map(|&(row, col)| (row - min_row + pad_row, col - min_col + pad_col))
        .collect()
}

impl Widget for ShapeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ShapeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let box_area = area.centered(
            Constraint::Length(BOX_CELLS * CellDisplay::width()),
            Constraint::Length(BOX_CELLS * CellDisplay::height()),
        );

        let col_constraints = (0..BOX_CELLS).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..BOX_CELLS).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = box_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied = self.shape.map(box_cells).unwrap_or_default();
        let empty_cell = CellDisplay::from_glyph(CellGlyph::Empty, false);

        for (row, grid_row) in grid_rows.enumerate() {
            for (col, grid_cell) in grid_row.into_iter().enumerate() {
                let here = (as_i16(row), as_i16(col));
                if occupied.contains(&here)
                    && let Some(shape) = self.shape
                {
                    let cell = CellDisplay::from_glyph(CellGlyph::Piece(shape.kind()), false);
                    Widget::render(&cell, grid_cell, buf);
                } else {
                    Widget::render(&empty_cell, grid_cell, buf);
                }
            }
        }
    }
}

fn as_i16(value: usize) -> i16 {
    i16::try_from(value).unwrap_or(i16::MAX)
}
