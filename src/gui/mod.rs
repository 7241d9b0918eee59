mod actions;
mod controller;
mod theme;
mod view;

use actions::*;
use controller::BoothController;
use gpui::{px, size, App, AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions};
use view::MainView;

/// Register the booth's fixed keyboard shortcuts
fn register_keybindings(cx: &mut App) {
    // GPUI spells the primary modifier differently per platform
    #[cfg(target_os = "macos")]
    let (save_key, reset_key) = ("cmd-s", "cmd-r");
    #[cfg(not(target_os = "macos"))]
    let (save_key, reset_key) = ("ctrl-s", "ctrl-r");

    cx.bind_keys([
        KeyBinding::new("right", NextStep, Some("main_view")),
        KeyBinding::new("left", PreviousStep, Some("main_view")),
        KeyBinding::new("space", CapturePhoto, Some("main_view")),
        KeyBinding::new(save_key, SavePhoto, Some("main_view")),
        KeyBinding::new(reset_key, StartOver, Some("main_view")),
    ]);
}

pub fn run() -> anyhow::Result<()> {
    let controller = BoothController::new()?;

    // Deep link: `snapbooth-gui /character` opens straight on that step.
    // Unknown paths are ignored and the booth starts on camera setup.
    if let Some(path) = std::env::args().nth(1) {
        controller.resolve_path(&path);
    }

    let application = Application::new();

    application.run(move |cx: &mut App| {
        gpui_component::init(cx);
        theme::install(cx);

        register_keybindings(cx);

        let bounds = Bounds::centered(None, size(px(1080.0), px(760.0)), cx);
        let controller = controller.clone();

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(900.0), px(640.0))),
                ..Default::default()
            },
            move |window, cx| {
                let controller = controller.clone();
                let view = cx.new(|cx| MainView::new(window, cx, controller.clone()));
                cx.new(|cx| gpui_component::Root::new(view, window, cx))
            },
        )
        .expect("failed to open GPUI window");

        cx.activate(true);
    });

    Ok(())
}
