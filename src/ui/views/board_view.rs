//! Board view - renders the fixed 8x8 grid with the initial position.

use gpui::{Context, Entity, Subscription, Window, canvas, div, prelude::*, px, rgb};

use crate::domain::{BOARD_SIZE, Cell};
use crate::models::BoardModel;
use crate::ui::components::render_square;
use crate::ui::theme::{BOARD_PADDING, PANEL_BG};

/// The board view that observes a BoardModel
pub struct BoardView {
    model: Entity<BoardModel>,
    _subscription: Subscription,
}

impl BoardView {
    pub fn new(model: Entity<BoardModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_measure = self.model.clone();

        let board_model = self.model.read(cx);

        // Sizing based on measured panel dimensions
        let square_size = board_model.square_size();
        let piece_size = board_model.piece_size();
        let board_total_size = square_size * 8.0;

        // Collect cells for rendering (can't borrow the model in closures)
        let cells: Vec<Cell> = board_model.board().cells().collect();

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children((0..BOARD_SIZE).map(|row| {
                div()
                    .flex()
                    .flex_shrink_0()
                    .children((0..BOARD_SIZE).map(|col| {
                        let index = row * BOARD_SIZE + col;
                        render_square(index, cells[index], square_size, piece_size)
                    }))
            }));

        let panel_content = div()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .flex()
            .items_center()
            .justify_center()
            .child(board);

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |model, cx| {
                    if model.panel_size != bounds.size {
                        model.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(panel_content)
    }
}
