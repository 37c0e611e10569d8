//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::i18n::{Locale, t};
use crate::services::{ApiClient, ServiceHub};

actions!(vital_stats, [Quit]);

/// Run the Vital Stats GUI application
pub fn run_app(config: AppConfig, api: ApiClient) {
    let filters = config.initial_filters();

    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Service hub -> dashboard completions channel
        let (hub, event_rx) = ServiceHub::new(api);

        let entities = AppEntities::init(hub, filters.clone(), cx);
        cx.set_global(entities.clone());

        entities.dashboard.update(cx, |dashboard, cx| {
            dashboard.start_ingest(event_rx, cx);
            dashboard.dispatch(AppEvent::Init, cx);
        });

        let title = t(Locale::from_system(), "app-title");
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), filters.clone(), cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open main window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
