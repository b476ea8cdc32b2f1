//! Application setup and window creation.

use anyhow::Result;
use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::models::BoardModel;
use crate::ui::views::BoardView;

/// Initialize and open the board window
pub fn run(cx: &mut App) -> Result<()> {
    gpui_component::init(cx);

    // The board is derived once here; nothing mutates it afterwards
    let model = cx.new(|_| BoardModel::new());

    let bounds = Bounds::centered(None, size(px(640.0), px(640.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| BoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
