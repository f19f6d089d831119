//! In-memory table engine for the catalog list.
//!
//! `TableState` is a plain value describing what the user asked for (search
//! text, column filters, sort, hidden columns, page window). Applying it to a
//! record slice never mutates the records; every call recomputes from scratch.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::record::{Column, InventoryRecord};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// The single active sort.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

/// Current list-view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    global_filter: String,
    column_filters: BTreeMap<Column, BTreeSet<Option<String>>>,
    sort: Option<Sort>,
    hidden: BTreeSet<Column>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            global_filter: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            hidden: BTreeSet::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Set the search text. Resets the page window to the first page.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
        self.page_index = 0;
    }

    /// Selected values for `column`; empty when the column is unfiltered.
    pub fn column_filter(&self, column: Column) -> Option<&BTreeSet<Option<String>>> {
        self.column_filters.get(&column)
    }

    /// Replace the inclusion filter for `column`.
    ///
    /// `None` in `values` selects rows whose value is missing. An empty set
    /// removes the filter. Resets the page window.
    pub fn set_column_filter<I>(&mut self, column: Column, values: I)
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let values: BTreeSet<Option<String>> = values.into_iter().collect();
        if values.is_empty() {
            self.column_filters.remove(&column);
        } else {
            self.column_filters.insert(column, values);
        }
        self.page_index = 0;
    }

    /// Add or remove a single value from the filter on `column`.
    pub fn set_filter_value(&mut self, column: Column, value: Option<String>, selected: bool) {
        let mut values = self.column_filters.remove(&column).unwrap_or_default();
        if selected {
            values.insert(value);
        } else {
            values.remove(&value);
        }
        self.set_column_filter(column, values);
    }

    pub fn is_filter_value_selected(&self, column: Column, value: Option<&str>) -> bool {
        self.column_filters
            .get(&column)
            .is_some_and(|values| values.contains(&value.map(str::to_owned)))
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn set_sort(&mut self, column: Column, direction: SortDirection) {
        self.sort = Some(Sort { column, direction });
    }

    /// Header-click semantics: a new column starts ascending and replaces the
    /// active sort; the active column flips direction.
    pub fn toggle_sort(&mut self, column: Column) {
        let direction = match self.sort {
            Some(s) if s.column == column => s.direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.set_sort(column, direction);
    }

    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn set_column_visibility(&mut self, column: Column, visible: bool) {
        if visible {
            self.hidden.remove(&column);
        } else {
            self.hidden.insert(column);
        }
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    pub fn hidden_columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.hidden.iter().copied()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Clamped to `1..=MAX_PAGE_SIZE`.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
    }

    /// Whether `record` survives the global filter and every column filter.
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        self.matches_global(record) && self.matches_columns(record)
    }

    fn matches_global(&self, record: &InventoryRecord) -> bool {
        if self.global_filter.is_empty() {
            return true;
        }
        let needle = self.global_filter.to_lowercase();
        self.visible_columns().into_iter().any(|c| {
            c.value(record)
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        })
    }

    fn matches_columns(&self, record: &InventoryRecord) -> bool {
        self.column_filters.iter().all(|(column, values)| {
            values.contains(&column.value(record).map(str::to_owned))
        })
    }

    /// Filtered then sorted rows (no paging).
    pub fn rows<'a>(&self, records: &'a [InventoryRecord]) -> Vec<&'a InventoryRecord> {
        let mut rows: Vec<&InventoryRecord> = records.iter().filter(|r| self.matches(r)).collect();

        if let Some(sort) = self.sort {
            // `sort_by` is stable; reversing the comparator (not the output)
            // keeps equal keys in source order for both directions.
            rows.sort_by(|a, b| {
                let ord = compare_values(sort.column.value(a), sort.column.value(b));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        rows
    }

    /// The current page window over `rows()`.
    pub fn page<'a>(&self, records: &'a [InventoryRecord]) -> Page<'a> {
        Page::window(self.rows(records), records.len(), self.page_index, self.page_size)
    }
}

/// Missing values sort as the empty string. Comparison is case-insensitive
/// and natural: runs of ASCII digits compare by numeric value, so
/// `"part 2" < "part 10"` and `"84.12" < "7318.15.00"`. Values that differ only
/// in case are equal keys.
fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("").to_lowercase();
    let b = b.unwrap_or("").to_lowercase();
    let mut left = digit_runs(&a);
    let mut right = digit_runs(&b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => compare_chunks(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Split `s` into alternating runs of ASCII digits and everything else.
fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Text before numbers; numbers by value; text by code point.
fn compare_chunks(a: &str, b: &str) -> Ordering {
    let is_number = |s: &str| s.bytes().all(|c| c.is_ascii_digit());
    match (is_number(a), is_number(b)) {
        (true, true) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (false, false) => a.cmp(b),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
    }
}

/// One page of filtered and sorted rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a InventoryRecord>,
    /// Effective index after clamping to the last page.
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// Rows that passed the filters.
    pub filtered_total: usize,
    /// Rows in the source set.
    pub source_total: usize,
}

impl<'a> Page<'a> {
    /// Cut the `page_index`-th window of `page_size` rows out of `rows`.
    ///
    /// An index past the end clamps to the last page. An empty `rows` yields a
    /// single empty page.
    pub fn window(
        rows: Vec<&'a InventoryRecord>,
        source_total: usize,
        page_index: usize,
        page_size: usize,
    ) -> Self {
        let page_size = page_size.max(1);
        let filtered_total = rows.len();
        let page_count = filtered_total.div_ceil(page_size).max(1);
        let page_index = page_index.min(page_count - 1);

        let rows = rows
            .into_iter()
            .skip(page_index * page_size)
            .take(page_size)
            .collect();

        Self {
            rows,
            page_index,
            page_size,
            page_count,
            filtered_total,
            source_total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Distinct categories across `records`, missing first, then lexical.
pub fn categories(records: &[InventoryRecord]) -> Vec<Option<String>> {
    records
        .iter()
        .map(|r| r.category().map(str::to_owned))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockbook_core::RecordId;

    fn rec(id: &str, item: &str, category: Option<&str>) -> InventoryRecord {
        let r = InventoryRecord::new(RecordId::new(id).unwrap()).with_item(item);
        match category {
            Some(c) => r.with_category(c),
            None => r,
        }
    }

    fn ids(rows: &[&InventoryRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    fn sample() -> Vec<InventoryRecord> {
        vec![
            rec("1", "Widget", Some("Tools")),
            rec("2", "gadget", Some("Parts")),
            rec("3", "Bolt", None),
            rec("4", "widget", Some("Tools")).with_hts_code("7318.15"),
            rec("5", "Anchor", Some("Hardware")).with_specifications("Zinc plated"),
        ]
    }

    #[test]
    fn empty_state_returns_everything_in_source_order() {
        let data = sample();
        let state = TableState::new();
        assert_eq!(ids(&state.rows(&data)), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn global_filter_is_case_insensitive_substring() {
        let data = sample();
        let mut state = TableState::new();
        state.set_global_filter("WIDG");
        assert_eq!(ids(&state.rows(&data)), vec!["1", "4"]);

        state.set_global_filter("7318");
        assert_eq!(ids(&state.rows(&data)), vec!["4"]);
    }

    #[test]
    fn global_filter_skips_hidden_columns() {
        let data = sample();
        let mut state = TableState::new();
        state.set_global_filter("zinc");
        assert_eq!(ids(&state.rows(&data)), vec!["5"]);

        state.set_column_visibility(Column::Specifications, false);
        assert!(state.rows(&data).is_empty());
    }

    #[test]
    fn category_filter_or_combines_and_empty_set_clears() {
        let data = sample();
        let mut state = TableState::new();
        state.set_column_filter(
            Column::Category,
            [Some("Tools".to_string()), Some("Hardware".to_string())],
        );
        assert_eq!(ids(&state.rows(&data)), vec!["1", "4", "5"]);

        state.set_column_filter(Column::Category, Vec::<Option<String>>::new());
        assert_eq!(state.rows(&data).len(), data.len());
        assert!(state.column_filter(Column::Category).is_none());
    }

    #[test]
    fn missing_category_only_matches_when_selected() {
        let data = sample();
        let mut state = TableState::new();
        state.set_filter_value(Column::Category, Some("Parts".into()), true);
        assert_eq!(ids(&state.rows(&data)), vec!["2"]);

        state.set_filter_value(Column::Category, None, true);
        assert_eq!(ids(&state.rows(&data)), vec!["2", "3"]);
        assert!(state.is_filter_value_selected(Column::Category, None));

        state.set_filter_value(Column::Category, Some("Parts".into()), false);
        assert_eq!(ids(&state.rows(&data)), vec!["3"]);
    }

    #[test]
    fn filter_changes_reset_page_index() {
        let mut state = TableState::new();
        state.set_page_index(3);
        state.set_global_filter("x");
        assert_eq!(state.page_index(), 0);

        state.set_page_index(2);
        state.set_filter_value(Column::Category, Some("Tools".into()), true);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn toggle_sort_flips_same_column_and_replaces_other() {
        let data = sample();
        let mut state = TableState::new();

        state.toggle_sort(Column::Item);
        assert_eq!(state.sort().unwrap().direction, SortDirection::Asc);
        assert_eq!(ids(&state.rows(&data)), vec!["5", "3", "2", "1", "4"]);

        state.toggle_sort(Column::Item);
        assert_eq!(state.sort().unwrap().direction, SortDirection::Desc);
        assert_eq!(ids(&state.rows(&data)), vec!["1", "4", "2", "3", "5"]);

        state.toggle_sort(Column::Category);
        assert_eq!(
            state.sort(),
            Some(Sort {
                column: Column::Category,
                direction: SortDirection::Asc
            })
        );
    }

    #[test]
    fn sort_is_stable_for_equal_keys_in_both_directions() {
        let data = sample();
        let mut state = TableState::new();

        state.set_sort(Column::Category, SortDirection::Asc);
        // missing category sorts as "", equal "Tools" keep source order
        assert_eq!(ids(&state.rows(&data)), vec!["3", "5", "2", "1", "4"]);

        state.set_sort(Column::Category, SortDirection::Desc);
        assert_eq!(ids(&state.rows(&data)), vec!["1", "4", "2", "5", "3"]);

        // "Widget" and "widget" differ only in case
        let pair = vec![rec("1", "Widget", None), rec("4", "widget", None)];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            state.set_sort(Column::Item, direction);
            assert_eq!(ids(&state.rows(&pair)), vec!["1", "4"]);
        }
    }

    #[test]
    fn digit_runs_sort_by_numeric_value() {
        let data = vec![
            rec("a", "Part 10", None).with_hts_code("7318.15.00"),
            rec("b", "Part 2", None).with_hts_code("84.12"),
            rec("c", "part 1", None).with_hts_code("8412"),
            rec("d", "Part", None),
        ];
        let mut state = TableState::new();

        state.set_sort(Column::Item, SortDirection::Asc);
        assert_eq!(ids(&state.rows(&data)), vec!["d", "c", "b", "a"]);

        state.set_sort(Column::HtsCode, SortDirection::Asc);
        assert_eq!(ids(&state.rows(&data)), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn natural_compare_handles_leading_zeros_and_mixed_runs() {
        assert_eq!(compare_values(Some("item 007"), Some("Item 7")), Ordering::Equal);
        assert_eq!(compare_values(Some("a9"), Some("a10")), Ordering::Less);
        assert_eq!(compare_values(Some("abc"), Some("12")), Ordering::Less);
        assert_eq!(compare_values(None, Some("0")), Ordering::Less);
        assert_eq!(
            compare_values(Some("99999999999999999999999"), Some("100000000000000000000000")),
            Ordering::Less
        );
    }

    #[test]
    fn hidden_column_is_still_sortable_and_filterable() {
        let data = sample();
        let mut state = TableState::new();
        state.set_column_visibility(Column::Category, false);
        state.set_filter_value(Column::Category, Some("Tools".into()), true);
        state.set_sort(Column::Category, SortDirection::Asc);

        assert_eq!(ids(&state.rows(&data)), vec!["1", "4"]);
        assert_eq!(
            state.visible_columns(),
            vec![Column::Item, Column::ItemCode, Column::HtsCode, Column::Specifications]
        );
    }

    #[test]
    fn page_window_reports_neighbours() {
        let data: Vec<InventoryRecord> = (0..25)
            .map(|i| rec(&format!("r{i}"), &format!("item {i}"), None))
            .collect();
        let mut state = TableState::new();

        let first = state.page(&data);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.page_count, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        state.set_page_index(2);
        let last = state.page(&data);
        assert_eq!(last.rows.len(), 5);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.rows[0].id.as_str(), "r20");
    }

    #[test]
    fn page_index_past_end_clamps_to_last_page() {
        let data = sample();
        let mut state = TableState::new();
        state.set_page_size(2);
        state.set_page_index(40);

        let page = state.page(&data);
        assert_eq!(page.page_index, 2);
        assert_eq!(ids(&page.rows), vec!["5"]);
    }

    #[test]
    fn empty_result_is_a_single_empty_page() {
        let data = sample();
        let mut state = TableState::new();
        state.set_global_filter("no such thing");

        let page = state.page(&data);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.filtered_total, 0);
        assert_eq!(page.source_total, 5);
        assert!(!page.has_previous() && !page.has_next());
    }

    #[test]
    fn page_size_is_clamped() {
        let mut state = TableState::new();
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(10_000);
        assert_eq!(state.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn categories_are_distinct_sorted_with_missing_first() {
        let data = sample();
        assert_eq!(
            categories(&data),
            vec![
                None,
                Some("Hardware".to_string()),
                Some("Parts".to_string()),
                Some("Tools".to_string()),
            ]
        );
    }

    fn arb_records() -> impl Strategy<Value = Vec<InventoryRecord>> {
        prop::collection::vec(
            (
                prop::option::of("[a-zA-Z0-9 ]{0,8}"),
                prop::option::of("[A-C]"),
                prop::option::of("[0-9.]{0,6}"),
            ),
            0..30,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (item, category, hts))| {
                    let mut r = InventoryRecord::new(RecordId::new(format!("rec_{i}")).unwrap());
                    r.item = item;
                    r.category_tag = category;
                    r.hts_code = hts;
                    r
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every surviving row contains the search text in a visible
        /// column, and every dropped row does not.
        #[test]
        fn global_filter_keeps_exactly_matching_rows(
            data in arb_records(),
            needle in "[a-zA-Z]{0,2}",
        ) {
            let mut state = TableState::new();
            state.set_global_filter(needle.clone());
            let kept = state.rows(&data);

            let lower = needle.to_lowercase();
            let expected: Vec<&InventoryRecord> = data
                .iter()
                .filter(|r| {
                    needle.is_empty()
                        || Column::ALL.iter().any(|c| {
                            c.value(r).is_some_and(|v| v.to_lowercase().contains(&lower))
                        })
                })
                .collect();
            prop_assert_eq!(kept, expected);
        }

        /// Property: category selection keeps exactly the rows whose category
        /// is selected; the empty selection keeps all.
        #[test]
        fn category_filter_is_set_membership(
            data in arb_records(),
            selected in prop::collection::btree_set(prop::option::of("[A-C]"), 0..4),
        ) {
            let mut state = TableState::new();
            state.set_column_filter(Column::Category, selected.clone());
            let kept = state.rows(&data);

            if selected.is_empty() {
                prop_assert_eq!(kept.len(), data.len());
            } else {
                let expected: Vec<&InventoryRecord> = data
                    .iter()
                    .filter(|r| selected.contains(&r.category().map(str::to_owned)))
                    .collect();
                prop_assert_eq!(kept, expected);
            }
        }

        /// Property: descending order is ascending order with runs of equal
        /// keys kept in source order.
        #[test]
        fn sort_orders_and_keeps_ties_stable(data in arb_records()) {
            let mut state = TableState::new();
            state.toggle_sort(Column::Item);
            let asc = state.rows(&data);
            state.toggle_sort(Column::Item);
            let desc = state.rows(&data);
            let source_pos = |r: &InventoryRecord| data.iter().position(|d| d.id == r.id);

            for pair in asc.windows(2) {
                let ord = compare_values(pair[0].item.as_deref(), pair[1].item.as_deref());
                prop_assert!(ord != Ordering::Greater);
                if ord == Ordering::Equal {
                    prop_assert!(source_pos(pair[0]) < source_pos(pair[1]));
                }
            }
            for pair in desc.windows(2) {
                let ord = compare_values(pair[0].item.as_deref(), pair[1].item.as_deref());
                prop_assert!(ord != Ordering::Less);
                if ord == Ordering::Equal {
                    prop_assert!(source_pos(pair[0]) < source_pos(pair[1]));
                }
            }
            prop_assert_eq!(asc.len(), data.len());
        }

        /// Property: pages partition the filtered rows.
        #[test]
        fn pages_partition_rows(data in arb_records(), size in 1usize..12) {
            let mut state = TableState::new();
            state.set_page_size(size);
            let all = state.rows(&data);
            let count = state.page(&data).page_count;

            let mut joined = Vec::new();
            for i in 0..count {
                state.set_page_index(i);
                joined.extend(state.page(&data).rows);
            }
            prop_assert_eq!(joined, all);
        }
    }
}
