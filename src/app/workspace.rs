//! Workspace - Main Shell with Layout
//!
//! Header on top, the dashboard page in the middle and the notice panel at
//! the bottom.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::notice_panel::NoticePanel;
use crate::domain::filter::FilterState;
use crate::features::dashboard::page::DashboardPage;
use crate::theme::colors::VsColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    page: Entity<DashboardPage>,
    notice_panel: Entity<NoticePanel>,
}

impl Workspace {
    pub fn new(entities: AppEntities, default_filters: FilterState, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let page = cx.new(|cx| DashboardPage::new(entities.clone(), default_filters, cx));
        let notice_panel = cx.new(|cx| NoticePanel::new(entities.clone(), cx));

        Self {
            header,
            page,
            notice_panel,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(VsColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.page.clone()),
            )
            .child(self.notice_panel.clone())
    }
}
