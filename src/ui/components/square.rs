//! Square rendering component.

use crate::domain::Cell;
use crate::ui::components::render_piece;
use crate::ui::theme::{hover_fill, square_fill};
use gpui::{div, prelude::*, px};

/// Render a single board square with its optional piece.
///
/// The hover highlight is per color class and purely visual; squares have no
/// click behavior.
pub fn render_square(
    index: usize,
    cell: Cell,
    square_size: f32,
    piece_size: f32,
) -> impl IntoElement {
    div()
        .id(("square", index))
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(square_fill(cell.color))
        .hover(move |style| style.bg(hover_fill(cell.color)))
        .flex()
        .items_center()
        .justify_center()
        .when_some(cell.piece, |el, piece| {
            el.child(render_piece(piece, piece_size))
        })
}
