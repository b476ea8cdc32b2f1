//! Theme constants and colors for the board UI.

use crate::domain::SquareColor;
use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square

// Initial panel size before the canvas has measured anything
pub const INITIAL_PANEL_SIZE: f32 = 600.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;

// Hover highlights, one per color class. Visual feedback only.
pub const LIGHT_SQUARE_HOVER: u32 = 0xDFC59C;
pub const DARK_SQUARE_HOVER: u32 = 0x9C734F;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;

/// Background for a square of the given color.
pub fn square_fill(color: SquareColor) -> Rgba {
    match color {
        SquareColor::Light => rgb(LIGHT_SQUARE),
        SquareColor::Dark => rgb(DARK_SQUARE),
    }
}

/// Hover background for a square of the given color.
pub fn hover_fill(color: SquareColor) -> Rgba {
    match color {
        SquareColor::Light => rgb(LIGHT_SQUARE_HOVER),
        SquareColor::Dark => rgb(DARK_SQUARE_HOVER),
    }
}
