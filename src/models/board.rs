//! Board state model - the application layer for the rendered board.
//!
//! The board itself is built once in the constructor and never mutated; the
//! only writable slot is the panel size measured by the view's canvas.

use crate::domain::{Board, Piece, SquareColor};
use crate::ui::BoardLayout;
use crate::ui::theme::INITIAL_PANEL_SIZE;
use gpui::{Pixels, Size, px};

pub struct BoardModel {
    board: Board,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
}

impl BoardModel {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            panel_size: Size {
                width: px(INITIAL_PANEL_SIZE),
                height: px(INITIAL_PANEL_SIZE),
            },
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn color_at(&self, row: usize, col: usize) -> SquareColor {
        self.board.color_at(row, col)
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.board.piece_at(row, col)
    }

    fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.panel_size)
    }

    pub fn square_size(&self) -> f32 {
        self.layout().square_size()
    }

    pub fn piece_size(&self) -> f32 {
        self.layout().piece_size()
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
