//! List-view state <-> query string.
//!
//! | param      | meaning                                             |
//! |------------|-----------------------------------------------------|
//! | `q`        | search text                                         |
//! | `category` | selected category, repeatable; empty = uncategorized|
//! | `sort`     | column key                                          |
//! | `dir`      | `asc` (default) or `desc`                           |
//! | `hide`     | hidden column key, repeatable                       |
//! | `page`     | 1-based page number                                 |
//! | `size`     | rows per page                                       |
//!
//! Unknown keys, unknown columns and unparsable numbers are ignored.

use stockbook_inventory::{Column, SortDirection, TableState};

/// Build the table state for a request.
pub fn parse(pairs: &[(String, String)], default_page_size: usize) -> TableState {
    let mut state = TableState::new();
    state.set_page_size(default_page_size);

    let mut categories: Vec<Option<String>> = Vec::new();
    let mut sort: Option<Column> = None;
    let mut direction = SortDirection::Asc;
    let mut page: Option<usize> = None;

    for (key, value) in pairs {
        match key.as_str() {
            "q" => state.set_global_filter(value.as_str()),
            "category" => categories.push(Some(value.clone()).filter(|v| !v.trim().is_empty())),
            "sort" => sort = value.parse().ok(),
            "dir" => direction = SortDirection::parse(value).unwrap_or(SortDirection::Asc),
            "hide" => {
                if let Ok(column) = value.parse::<Column>() {
                    state.set_column_visibility(column, false);
                }
            }
            "page" => page = value.parse::<usize>().ok().filter(|p| *p > 0),
            "size" => {
                if let Ok(size) = value.parse::<usize>() {
                    state.set_page_size(size);
                }
            }
            _ => {}
        }
    }

    state.set_column_filter(Column::Category, categories);
    if let Some(column) = sort.filter(|c| c.is_sortable()) {
        state.set_sort(column, direction);
    }
    // Applied last: filter setters reset the page window.
    if let Some(page) = page {
        state.set_page_index(page - 1);
    }

    state
}

/// Encode `state` as a query string, omitting defaults.
pub fn to_query_string(state: &TableState, default_page_size: usize) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if !state.global_filter().is_empty() {
        pairs.push(("q", state.global_filter().to_string()));
    }
    if let Some(values) = state.column_filter(Column::Category) {
        for value in values {
            pairs.push(("category", value.clone().unwrap_or_default()));
        }
    }
    if let Some(sort) = state.sort() {
        pairs.push(("sort", sort.column.key().to_string()));
        if sort.direction == SortDirection::Desc {
            pairs.push(("dir", sort.direction.key().to_string()));
        }
    }
    for column in state.hidden_columns() {
        pairs.push(("hide", column.key().to_string()));
    }
    if state.page_index() > 0 {
        pairs.push(("page", (state.page_index() + 1).to_string()));
    }
    if state.page_size() != default_page_size {
        pairs.push(("size", state.page_size().to_string()));
    }

    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Link to the list view in `state`.
pub fn list_href(state: &TableState, default_page_size: usize) -> String {
    let query = to_query_string(state, default_page_size);
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}
