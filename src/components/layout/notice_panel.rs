//! Notice Panel Component
//!
//! Shows dashboard notices at the bottom of the screen, newest first.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::NOTICE_PANEL_HEIGHT;
use crate::eventing::app_event::AppEvent;
use crate::i18n::{Locale, t};
use crate::state::Notice;
use crate::theme::colors::VsColors;
use crate::utils::format::format_time;

/// Notice panel component
pub struct NoticePanel {
    entities: AppEntities,
    expanded: bool,
}

impl NoticePanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_notice(&self, notice: &Notice, locale: Locale) -> impl IntoElement {
        let level = notice.level();
        let id = notice.id;
        let dashboard = self.entities.dashboard.clone();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(VsColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(60.0))
                    .child(format_time(&notice.timestamp)),
            )
            .child(
                div()
                    .text_color(VsColors::notice(level))
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(level.label()),
            )
            .child(
                div()
                    .text_color(VsColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(notice.kind.message(locale)),
            )
            .child(
                div()
                    .id(("dismiss-notice", id as usize))
                    .px_1()
                    .text_color(VsColors::text_muted())
                    .text_size(px(11.0))
                    .cursor_pointer()
                    .hover(|s| s.text_color(VsColors::text_light()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        dashboard.update(cx, |c, cx| c.dispatch(AppEvent::DismissNotice(id), cx));
                    })
                    .child("×"),
            )
    }
}

impl Render for NoticePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let notices = self.entities.dashboard.read(cx).state().notices().clone();

        let height = if self.expanded {
            px(NOTICE_PANEL_HEIGHT)
        } else {
            px(32.0)
        };
        let dashboard = self.entities.dashboard.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(VsColors::notice_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(VsColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(t(locale, "notice-title")),
                            )
                            .child(
                                div()
                                    .text_color(VsColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({})", notices.len())),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .id("clear-notices")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(VsColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        dashboard.update(cx, |c, cx| {
                                            c.dispatch(AppEvent::ClearNotices, cx)
                                        });
                                    })
                                    .child(t(locale, "action-clear")),
                            )
                            .child(
                                div()
                                    .id("toggle-notices")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(VsColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            this.toggle_expanded(cx);
                                        },
                                    ))
                                    .child(if self.expanded { "▼" } else { "▲" }),
                            ),
                    ),
            );

        if self.expanded {
            panel = panel.child(
                div()
                    .id("notice-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(
                        notices
                            .newest_first()
                            .map(|notice| self.render_notice(notice, locale)),
                    ),
            );
        }

        panel
    }
}
