use polytile_engine::PieceShape;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, Widget},
};

use crate::ui::widgets::{ShapeDisplay, color, style};

/// Renders the palette: every shape of the puzzle's piece set in a vertical
/// stack, with its hotkey in the border title and the selected shape
/// highlighted.
#[derive(Debug)]
pub struct PaletteDisplay {
    shapes: &'static [PieceShape],
    selected: Option<PieceShape>,
}

impl PaletteDisplay {
    pub fn new(shapes: &'static [PieceShape], selected: Option<PieceShape>) -> Self {
        Self { shapes, selected }
    }

    pub fn width(&self) -> u16 {
        self.entry().width()
    }

    pub fn height(&self) -> u16 {
        let count = u16::try_from(self.shapes.len()).unwrap_or(u16::MAX);
        count * self.entry().height()
    }

    fn entry(&self) -> ShapeDisplay<'static> {
        ShapeDisplay::new().block(BlockWidget::bordered())
    }
}

impl Widget for PaletteDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PaletteDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entry_height = self.entry().height();
        let constraints = self.shapes.iter().map(|_| Constraint::Length(entry_height));
        let entry_areas = area.layout_vec(&Layout::vertical(constraints));

        for (index, (&shape, entry_area)) in self.shapes.iter().zip(entry_areas).enumerate() {
            let border_color = if self.selected == Some(shape) {
                color::YELLOW
            } else {
                color::WHITE
            };
            let block = BlockWidget::bordered()
                .title(Line::from(format!("{}", index + 1)).centered())
                .border_style(border_color)
                .style(style::DEFAULT);
            ShapeDisplay::new()
                .shape(shape)
                .block(block)
                .render(entry_area, buf);
        }
    }
}
