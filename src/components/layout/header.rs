//! Header Component
//!
//! The application header with title, subtitle, loading indicator and
//! language switcher.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::VsColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let loading = self.entities.dashboard.read(cx).state().loading().any();
        let entities = self.entities.clone();

        div()
            .h(px(56.0))
            .w_full()
            .bg(VsColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: title and subtitle
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_color(VsColors::text_light())
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, "app-title")),
                    )
                    .child(
                        div()
                            .text_color(VsColors::accent_soft())
                            .text_size(px(Typography::TEXT_XS))
                            .child(t(locale, "app-subtitle")),
                    ),
            )
            // Right side: activity and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_color(if loading {
                                VsColors::warning()
                            } else {
                                VsColors::success()
                            })
                            .text_size(px(10.0))
                            .child(if loading { "○" } else { "●" }),
                    )
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(VsColors::text_light())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                            })
                            .child(locale.display_name()),
                    ),
            )
    }
}
