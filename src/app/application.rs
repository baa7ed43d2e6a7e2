//! Application - App Initialization and Window Management
//!
//! Entry point for the widget gallery.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::gallery::Gallery;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::t;
use crate::overlay::OverlayDocument;
use crate::states::UiSettings;

actions!(ui_kit, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let settings = UiSettings::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            UiSettings::default()
        });
        let title = t(settings.locale(), "gallery-title");
        info!(locale = settings.locale().code(), "Settings loaded");
        cx.set_global(settings);
        OverlayDocument::init(cx);

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Gallery::new(window, cx))
        }) {
            error!(error = %e, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
