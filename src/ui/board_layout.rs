//! Board layout calculations - sizing from the measured panel.

use crate::ui::theme::{BOARD_PADDING, INITIAL_PANEL_SIZE, PIECE_SCALE};
use gpui::{Pixels, Size, px};

/// Handles all layout calculations for the board grid
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / 8.0).max(30.0)
    }

    /// Calculate piece size based on square size
    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(INITIAL_PANEL_SIZE),
            height: px(INITIAL_PANEL_SIZE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::size;

    #[test]
    fn square_size_fits_the_smaller_panel_dimension() {
        let layout = BoardLayout::new(size(px(840.0), px(440.0)));
        // 440 minus padding on both edges leaves 400 for eight squares
        assert_eq!(layout.square_size(), 50.0);
        assert_eq!(layout.board_total_size(), 400.0);
    }

    #[test]
    fn square_size_never_collapses() {
        let layout = BoardLayout::new(size(px(10.0), px(10.0)));
        assert_eq!(layout.square_size(), 30.0);
    }

    #[test]
    fn pieces_are_scaled_to_their_square() {
        let layout = BoardLayout::default();
        assert!(layout.piece_size() < layout.square_size());
    }
}
