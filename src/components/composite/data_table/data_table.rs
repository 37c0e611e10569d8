//! DataTable Component
//!
//! A data table with a sticky header, zebra rows and an optional row click
//! handler.

use std::rc::Rc;

use gpui::{
    App, Context, Div, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::VsColors;

type RowClickHandler<R> = Rc<dyn Fn(&R, &mut Window, &mut App)>;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
    on_row_click: Option<RowClickHandler<R>>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
            on_row_click: None,
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty and loading placeholders
    pub fn set_messages(
        &mut self,
        empty: impl Into<SharedString>,
        loading: impl Into<SharedString>,
    ) {
        self.empty_message = empty.into();
        self.loading_message = loading.into();
    }

    /// Make rows clickable
    pub fn set_on_row_click(&mut self, handler: impl Fn(&R, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    pub fn clear_on_row_click(&mut self) {
        self.on_row_click = None;
    }

    fn sized_cell(width: ColumnWidth, numeric: bool) -> Div {
        let cell = match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
        };
        let cell = cell.px_3().flex().items_center();
        if numeric { cell.justify_end() } else { cell }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(VsColors::table_header_bg())
            .border_b_1()
            .border_color(VsColors::border())
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width, col.numeric)
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(VsColors::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            VsColors::content_bg()
        } else {
            VsColors::table_row_alt()
        };

        let mut element = div()
            .id(("data-table-row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(VsColors::table_row_hover()))
            .border_b_1()
            .border_color(VsColors::border())
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width, col.numeric)
                    .text_sm()
                    .text_color(VsColors::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }));

        if let Some(handler) = self.on_row_click.clone() {
            let row = row.clone();
            element = element
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(&row, window, cx));
        }

        element
    }

    fn render_placeholder(&self, message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(VsColors::text_muted())
            .child(message)
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(VsColors::content_bg())
            .border_1()
            .border_color(VsColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header());

        // Keep showing rows while a refresh is in flight
        if self.rows.is_empty() {
            let message = if self.loading {
                self.loading_message.clone()
            } else {
                self.empty_message.clone()
            };
            table = table.child(self.render_placeholder(message));
        } else {
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .opacity(if self.loading { 0.6 } else { 1.0 })
                    .children(
                        self.rows
                            .iter()
                            .enumerate()
                            .map(|(i, row)| self.render_row(row, i)),
                    ),
            );
        }

        table
    }
}
