//! Catalog list page.

use std::fmt::Write;

use stockbook_inventory::{Column, InventoryRecord, Page, SortDirection, TableState, categories};

use super::{escape, escape_opt, item_href, layout};
use crate::app::query;

pub const TITLE: &str = "Inventory Management System";

const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListMode {
    /// Served over HTTP: search box, menus, sortable headers and pager, all
    /// driven by the query string.
    Interactive { default_page_size: usize },
    /// Pre-rendered file: every row on one page, no controls.
    Static,
}

pub fn render(records: &[InventoryRecord], state: &TableState, mode: ListMode) -> String {
    let page = match mode {
        ListMode::Interactive { .. } => state.page(records),
        ListMode::Static => Page::window(state.rows(records), records.len(), 0, records.len()),
    };
    let columns = state.visible_columns();

    let mut html = String::new();
    let _ = write!(html, r#"<div class="page"><h1>{}</h1><div class="card">"#, escape(TITLE));

    if let ListMode::Interactive { default_page_size } = mode {
        toolbar(&mut html, records, state, default_page_size);
    }

    html.push_str("<table><thead><tr>");
    for column in &columns {
        header_cell(&mut html, state, *column, mode);
    }
    html.push_str("</tr></thead><tbody>");

    if page.rows.is_empty() {
        let _ = write!(
            html,
            r#"<tr><td colspan="{}" class="empty">No results found.</td></tr>"#,
            columns.len().max(1)
        );
    }
    for record in &page.rows {
        row(&mut html, record, &columns);
    }
    html.push_str("</tbody></table>");

    footer(&mut html, state, &page, mode);
    html.push_str("</div></div>");

    layout(TITLE, &html)
}

fn toolbar(html: &mut String, records: &[InventoryRecord], state: &TableState, default_page_size: usize) {
    html.push_str(r#"<div class="toolbar"><form method="get" action="/">"#);
    let _ = write!(
        html,
        r#"<input type="search" name="q" placeholder="Search inventory..." value="{}">"#,
        escape(state.global_filter())
    );
    // Carry everything except the search text and page; a new search starts
    // on the first page.
    let mut carried = state.clone();
    carried.set_global_filter("");
    for pair in query::to_query_string(&carried, default_page_size).split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map(|v| v.into_owned()).unwrap_or_default();
        let _ = write!(
            html,
            r#"<input type="hidden" name="{}" value="{}">"#,
            escape(key),
            escape(&value)
        );
    }
    html.push_str(r#"<button class="button" type="submit">Search</button></form><div class="menus">"#);

    html.push_str(r#"<details class="menu"><summary>Category &#9662;</summary><ul>"#);
    for category in categories(records) {
        let selected = state.is_filter_value_selected(Column::Category, category.as_deref());
        let mut next = state.clone();
        next.set_filter_value(Column::Category, category.clone(), !selected);
        let _ = write!(
            html,
            r#"<li><a href="{}">{} {}</a></li>"#,
            escape(&query::list_href(&next, default_page_size)),
            checkbox(selected),
            escape(category.as_deref().unwrap_or(UNCATEGORIZED))
        );
    }
    html.push_str("</ul></details>");

    html.push_str(r#"<details class="menu"><summary>Columns &#9662;</summary><ul>"#);
    for column in Column::ALL {
        let visible = state.is_visible(column);
        let mut next = state.clone();
        next.set_column_visibility(column, !visible);
        let _ = write!(
            html,
            r#"<li><a href="{}">{} {}</a></li>"#,
            escape(&query::list_href(&next, default_page_size)),
            checkbox(visible),
            escape(column.label())
        );
    }
    html.push_str("</ul></details></div></div>");
}

fn header_cell(html: &mut String, state: &TableState, column: Column, mode: ListMode) {
    let ListMode::Interactive { default_page_size } = mode else {
        let _ = write!(html, "<th>{}</th>", escape(column.label()));
        return;
    };
    if !column.is_sortable() {
        let _ = write!(html, "<th>{}</th>", escape(column.label()));
        return;
    }

    let indicator = match state.sort() {
        Some(s) if s.column == column && s.direction == SortDirection::Asc => "&uarr;",
        Some(s) if s.column == column => "&darr;",
        _ => "&#8597;",
    };
    let mut next = state.clone();
    next.toggle_sort(column);
    next.set_page_index(0);
    let _ = write!(
        html,
        r#"<th><a href="{}">{} {}</a></th>"#,
        escape(&query::list_href(&next, default_page_size)),
        escape(column.label()),
        indicator
    );
}

fn row(html: &mut String, record: &InventoryRecord, columns: &[Column]) {
    let href = escape(&item_href(&record.id));
    html.push_str("<tr>");
    for column in columns {
        let value = column.value(record);
        match column {
            Column::Category => {
                let badge = value
                    .map(|v| format!(r#"<span class="badge">{}</span>"#, escape(v)))
                    .unwrap_or_default();
                let _ = write!(html, r#"<td><a href="{href}">{badge}</a></td>"#);
            }
            Column::Specifications => {
                let text = escape_opt(value);
                let _ = write!(
                    html,
                    r#"<td class="truncate"><a href="{href}" title="{text}">{text}</a></td>"#
                );
            }
            _ => {
                let _ = write!(html, r#"<td><a href="{href}">{}</a></td>"#, escape_opt(value));
            }
        }
    }
    html.push_str("</tr>");
}

fn footer(html: &mut String, state: &TableState, page: &Page<'_>, mode: ListMode) {
    let _ = write!(
        html,
        r#"<div class="footer"><div class="muted">Showing {} of {} items</div>"#,
        page.filtered_total, page.source_total
    );

    if let ListMode::Interactive { default_page_size } = mode {
        html.push_str(r#"<div class="menus">"#);
        let _ = write!(
            html,
            r#"<span class="muted">Page {} of {}</span>"#,
            page.page_index + 1,
            page.page_count
        );
        pager_link(html, state, page.has_previous(), page.page_index.saturating_sub(1), "Previous", default_page_size);
        pager_link(html, state, page.has_next(), page.page_index + 1, "Next", default_page_size);
        html.push_str("</div>");
    }

    html.push_str("</div>");
}

fn pager_link(
    html: &mut String,
    state: &TableState,
    enabled: bool,
    target: usize,
    label: &str,
    default_page_size: usize,
) {
    if !enabled {
        let _ = write!(html, r#"<span class="button disabled">{label}</span>"#);
        return;
    }
    let mut next = state.clone();
    next.set_page_index(target);
    let _ = write!(
        html,
        r#"<a class="button" href="{}">{label}</a>"#,
        escape(&query::list_href(&next, default_page_size))
    );
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "&#9745;" } else { "&#9744;" }
}
