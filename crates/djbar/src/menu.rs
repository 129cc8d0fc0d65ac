//! Render sink.  A dedicated task owns stdout and redraws the menu block
//! whenever the engine pushes a new `MenuView`; nothing here feeds back
//! into the engine.

use djbar_proto::player::MenuView;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fixed status-bar title.
pub const BAR_TITLE: &str = "DJ";

pub fn spawn(mut render_rx: mpsc::Receiver<MenuView>) -> JoinHandle<()> {
    tokio::spawn(async move {
        // Draw the placeholder menu before the first fetch lands.
        draw(&MenuView::unknown());
        while let Some(view) = render_rx.recv().await {
            draw(&view);
        }
    })
}

fn draw(view: &MenuView) {
    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(render_block(view).as_bytes());
    let _ = stdout.flush();
}

fn render_block(view: &MenuView) -> String {
    let mut out = String::new();
    out.push_str(BAR_TITLE);
    out.push('\n');
    out.push_str(&format!("  {}\n", view.song));
    if !view.artist.is_empty() {
        out.push_str(&format!("  {}\n", view.artist));
    }
    out.push_str(&format!("  {}\n", view.volume));
    out.push_str(&format!("  [{}]\n", view.toggle));
    out
}
