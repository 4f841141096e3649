//! Application entry point - window setup and tracing initialization.

use anyhow::Context as _;
use gpui::{
    px, size, App, AppContext as _, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use spangrid::app::Workspace;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spangrid=info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        if let Err(err) = open_main_window(cx) {
            tracing::error!("{err:#}");
            cx.quit();
        }
    });
}

fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, size(px(720.0), px(360.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Spangrid".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |_, cx| cx.new(Workspace::new),
    )
    .context("failed to open window")?;
    cx.activate(true);
    Ok(())
}
