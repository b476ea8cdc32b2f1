use chessboard::app;
use chessboard::ui::IconAssets;
use gpui::Application;

fn main() {
    Application::new().with_assets(IconAssets).run(|cx| {
        if let Err(err) = app::run(cx) {
            eprintln!("failed to open window: {err:#}");
            cx.quit();
        }
    });
}
