use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, palette_display::*, progress_display::*,
    session_display::*, shape_display::*,
};

mod board_display;
mod cell_display;
mod palette_display;
mod progress_display;
mod session_display;
mod shape_display;

mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 100, 255);
    pub const LIGHT_BLUE: Color = Color::Rgb(150, 200, 255);
    pub const PURPLE: Color = Color::Rgb(160, 60, 220);
    pub const LIGHT_PURPLE: Color = Color::Rgb(210, 170, 240);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(55, 65, 81);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const BLOCKED: Style = bg_only(color::DARK_GRAY);

    pub const DOMINO: Style = bg_only(color::BLUE);
    pub const T_TETROMINO: Style = bg_only(color::PURPLE);
    pub const PREVIEW_DOMINO: Style = bg_only(color::LIGHT_BLUE);
    pub const PREVIEW_T_TETROMINO: Style = bg_only(color::LIGHT_PURPLE);
    pub const PREVIEW_ILLEGAL: Style = fg_bg(color::WHITE, color::RED);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
