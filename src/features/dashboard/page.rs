//! Dashboard Page
//!
//! Filter section, results header and results table.

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::primitives::button::Button;
use crate::constants::{NAME_COLUMN_WIDTH, TOTAL_COLUMN_WIDTH};
use crate::domain::aggregation::EntityTotal;
use crate::domain::filter::{FilterState, RecordType, available_years};
use crate::domain::geography::{GeoEntity, GeoId};
use crate::eventing::app_event::AppEvent;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{Locale, t};
use crate::state::{DashboardState, Scope};
use crate::theme::colors::VsColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_number;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    table: Entity<DataTable<EntityTotal>>,
    /// Filters restored by the clear button
    default_filters: FilterState,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, default_filters: FilterState, cx: &mut Context<Self>) -> Self {
        let table = cx.new(DataTable::new);

        cx.observe(&entities.dashboard, |this, _, cx| {
            this.sync_table(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.i18n, |this, _, cx| {
            this.sync_table(cx);
            cx.notify();
        })
        .detach();

        let mut page = Self {
            entities,
            table,
            default_filters,
        };
        page.sync_table(cx);
        page
    }

    /// Push rows, columns and placeholders for the current scope into the table
    fn sync_table(&mut self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.dashboard.read(cx).state();
        let scope = state.scope();
        let rows = state.rows();
        let loading = match scope {
            Scope::National => state.loading().states,
            Scope::State(_) => state.loading().municipalities,
        };

        let name_label = match scope {
            Scope::National => t(locale, "col-state"),
            Scope::State(_) => t(locale, "col-municipality"),
        };
        let columns = vec![
            Column::new("name", name_label, |row: &EntityTotal| {
                div().child(row.name.clone()).into_any_element()
            })
            .flex_width(NAME_COLUMN_WIDTH),
            Column::new("total", t(locale, "col-total"), move |row: &EntityTotal| {
                div()
                    .child(format_number(row.total, locale))
                    .into_any_element()
            })
            .fixed_width(TOTAL_COLUMN_WIDTH)
            .numeric(),
        ];

        let dashboard = self.entities.dashboard.clone();
        self.table.update(cx, |table, cx| {
            table.set_columns(columns);
            table.set_rows(rows);
            table.set_loading(loading);
            table.set_messages(t(locale, "table-no-data"), t(locale, "table-loading"));
            match scope {
                Scope::National => table.set_on_row_click(move |row, _window, cx| {
                    let id = row.id;
                    dashboard.update(cx, |c, cx| c.dispatch(AppEvent::SelectState(id), cx));
                }),
                Scope::State(_) => table.clear_on_row_click(),
            }
            cx.notify();
        });
    }

    fn change_filters(dashboard: &Entity<DashboardController>, filters: FilterState, cx: &mut App) {
        dashboard.update(cx, |c, cx| c.dispatch(AppEvent::ChangeFilters(filters), cx));
    }

    fn render_field_label(&self, label: &str) -> impl IntoElement {
        div()
            .w(px(120.0))
            .flex_none()
            .text_size(px(Typography::TEXT_SM))
            .text_color(VsColors::text_secondary())
            .child(label.to_string())
    }

    fn render_chip_row(&self, label: &str, chips: Vec<Button>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_start()
            .gap_4()
            .child(self.render_field_label(label))
            .child(div().flex_1().flex().flex_wrap().gap_2().children(chips))
    }

    fn record_type_chips(&self, state: &DashboardState, locale: Locale) -> Vec<Button> {
        let filters = state.filters();
        RecordType::selectable()
            .iter()
            .map(|&rt| {
                let dashboard = self.entities.dashboard.clone();
                let next = filters.clone().with_record_type(rt);
                Button::chip(
                    SharedString::from(format!("record-{}", rt.key())),
                    t(locale, rt.label_key()).to_string(),
                    filters.record_type == rt,
                )
                .on_click(move |_, _, cx| Self::change_filters(&dashboard, next.clone(), cx))
            })
            .collect()
    }

    fn year_chips(&self, state: &DashboardState) -> Vec<Button> {
        let filters = state.filters();
        available_years()
            .into_iter()
            .map(|year| {
                let dashboard = self.entities.dashboard.clone();
                let next = filters.clone().with_year(year);
                Button::chip(
                    SharedString::from(format!("year-{year}")),
                    year.to_string(),
                    filters.year == year,
                )
                .on_click(move |_, _, cx| Self::change_filters(&dashboard, next.clone(), cx))
            })
            .collect()
    }

    /// "All" chip followed by one chip per entity
    fn entity_chips(
        &self,
        prefix: &str,
        all_label: &str,
        entities: &[GeoEntity],
        selected: Option<GeoId>,
        apply: impl Fn(Option<GeoId>) -> FilterState,
    ) -> Vec<Button> {
        let mut chips = Vec::with_capacity(entities.len() + 1);
        let choices = std::iter::once((None, all_label.to_string()))
            .chain(entities.iter().map(|e| (Some(e.id), e.name.clone())));

        for (id, name) in choices {
            let dashboard = self.entities.dashboard.clone();
            let next = apply(id);
            let element_id = match id {
                Some(id) => format!("{prefix}-{id}"),
                None => format!("{prefix}-all"),
            };
            chips.push(
                Button::chip(SharedString::from(element_id), name, selected == id)
                    .on_click(move |_, _, cx| Self::change_filters(&dashboard, next.clone(), cx)),
            );
        }
        chips
    }

    fn render_filter_section(&self, state: &DashboardState, locale: Locale) -> impl IntoElement {
        let filters = state.filters().clone();
        let region_chips = {
            let filters = filters.clone();
            self.entity_chips(
                "region",
                t(locale, "filter-all-regions"),
                state.regions(),
                filters.region,
                move |id| filters.clone().with_region(id),
            )
        };
        let state_chips = {
            let filters = filters.clone();
            self.entity_chips(
                "state",
                t(locale, "filter-all-states"),
                state.states(),
                filters.state,
                move |id| filters.clone().with_state(id),
            )
        };

        let refresh = self.entities.dashboard.clone();
        let clear = self.entities.dashboard.clone();
        let defaults = self.default_filters.clone();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(VsColors::content_bg())
            .border_1()
            .border_color(VsColors::border())
            .rounded_md()
            .child(self.render_chip_row(
                t(locale, "filter-record-type"),
                self.record_type_chips(state, locale),
            ))
            .child(self.render_chip_row(t(locale, "filter-year"), self.year_chips(state)))
            .child(self.render_chip_row(t(locale, "filter-region"), region_chips))
            .child(self.render_chip_row(t(locale, "filter-state"), state_chips))
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("clear-filters", t(locale, "action-clear")).on_click(
                            move |_, _, cx| Self::change_filters(&clear, defaults.clone(), cx),
                        ),
                    )
                    .child(
                        Button::primary("search", t(locale, "action-search"))
                            .disabled(state.loading().any())
                            .on_click(move |_, _, cx| {
                                refresh.update(cx, |c, cx| c.dispatch(AppEvent::Refresh, cx));
                            }),
                    ),
            )
    }

    fn render_results_header(&self, state: &DashboardState, locale: Locale) -> impl IntoElement {
        let filters = state.filters();
        let title = match state.selected_state() {
            Some(uf) => format!("{} - {}", t(locale, "results-municipalities"), uf.name),
            None => t(locale, "results-states").to_string(),
        };
        let subtitle = format!(
            "{} · {} {}",
            t(locale, filters.record_type.label_key()),
            t(locale, "results-year"),
            filters.year
        );

        let mut left = div().flex().flex_col().gap_1();
        if state.scope() != Scope::National {
            let dashboard = self.entities.dashboard.clone();
            left = left.child(
                div().child(
                    Button::ghost("go-back", format!("← {}", t(locale, "action-back")))
                        .on_click(move |_, _, cx| {
                            dashboard.update(cx, |c, cx| c.dispatch(AppEvent::GoBack, cx));
                        }),
                ),
            );
        }
        left = left
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(VsColors::text_primary())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(VsColors::text_secondary())
                    .child(subtitle),
            );

        div()
            .w_full()
            .flex()
            .items_end()
            .justify_between()
            .child(left)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_end()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(VsColors::text_secondary())
                            .child(t(locale, "results-total")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_TOTAL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(VsColors::accent())
                            .child(format_number(state.total(), locale)),
                    ),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.dashboard.read(cx).state().clone();

        div()
            .id("dashboard-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .text_size(px(Typography::TEXT_BASE))
            .child(self.render_filter_section(&state, locale))
            .child(self.render_results_header(&state, locale))
            .child(div().flex_1().min_h(px(320.0)).child(self.table.clone()))
    }
}
