//! Piece rendering component.

use crate::domain::Piece;
use gpui::{div, img, prelude::*, px};

/// Render a piece icon centered in its square.
///
/// The path passed to `img` is a virtual one; the SVG bytes come from the
/// icon generator behind [`crate::ui::IconAssets`], not from disk.
pub fn render_piece(piece: Piece, piece_size: f32) -> impl IntoElement {
    let icon = img(piece.svg_path()).size(px(piece_size));
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(icon)
}
