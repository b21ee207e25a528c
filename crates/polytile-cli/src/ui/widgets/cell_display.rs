use polytile_engine::PieceKind;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::{color, style};

/// Visual classification of one grid cell, preview overlay included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellGlyph {
    Empty,
    Blocked,
    Piece(PieceKind),
    PreviewLegal(PieceKind),
    PreviewIllegal,
}

/// Renders a single grid cell as a colored terminal block.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_glyph(glyph: CellGlyph, show_dots: bool) -> Self {
        match glyph {
            CellGlyph::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            CellGlyph::Blocked => Self::new(style::BLOCKED, ""),
            CellGlyph::Piece(kind) => {
                let style = match kind {
                    PieceKind::Domino => style::DOMINO,
                    PieceKind::TTetromino => style::T_TETROMINO,
                };
                Self::new(style, "")
            }
            CellGlyph::PreviewLegal(kind) => {
                let style = match kind {
                    PieceKind::Domino => style::PREVIEW_DOMINO,
                    PieceKind::TTetromino => style::PREVIEW_T_TETROMINO,
                };
                Self::new(style, "")
            }
            CellGlyph::PreviewIllegal => Self::new(style::PREVIEW_ILLEGAL, "x"),
        }
    }

    /// Marks the cursor cell with a bracket symbol in a contrasting
    /// foreground, keeping the cell's background.
    #[must_use]
    pub fn cursor(self) -> Self {
        Self {
            style: self.style.fg(color::WHITE),
            symbol: "[]",
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
