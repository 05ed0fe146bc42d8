use std::collections::BTreeMap;

use crate::repository::pagination::{Page, PageRequest};

/// Tab selection meaning "no tab restriction"
pub const ALL_TAB: &str = "All";

/// Number of rows per page when the caller does not choose one
pub const DEFAULT_PER_PAGE: usize = 10;

/// Seam a record implements to become drivable by a [`TableQuery`]
///
/// The three methods mirror the three predicates a table view applies:
/// free-text search over a fixed set of fields, a single status-like tab
/// dimension, and structured per-column filters looked up by key.
pub trait TableRecord {
    /// Values the free-text search term is matched against
    fn search_fields(&self) -> Vec<String>;

    /// Value compared against the active tab (exact match)
    fn tab_value(&self) -> String;

    /// Value for a structured filter key, `None` when the record has no
    /// value for that key. A populated filter never matches `None`.
    fn filter_value(&self, key: &str) -> Option<String>;
}

/// Accumulated view state of a filterable, paginated table.
///
/// `apply` ANDs three predicates over the full row set, then slices one
/// page out of the survivors. Every filter mutation resets the current
/// page to 1 so a narrowed result set never leaves the view stranded on a
/// page that no longer exists; only explicit page navigation moves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    search: String,
    tab: String,
    filters: BTreeMap<String, String>,
    page: usize,
    per_page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tab: ALL_TAB.to_string(),
            filters: BTreeMap::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Set the free-text search term and reset to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Select a tab (or [`ALL_TAB`]) and reset to the first page
    pub fn set_tab(&mut self, tab: impl Into<String>) {
        self.tab = tab.into();
        self.page = 1;
    }

    /// Set a structured filter and reset to the first page
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
        self.page = 1;
    }

    /// Drop a structured filter and reset to the first page
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
        self.page = 1;
    }

    /// Change the page size and reset to the first page
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page;
        self.page = 1;
    }

    /// Navigate to a page (1-based; values below 1 are clamped)
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Run the query against the full row set and return the visible page
    pub fn apply<T: TableRecord + Clone>(&self, rows: &[T]) -> Page<T> {
        let filtered: Vec<T> = rows
            .iter()
            .filter(|row| self.matches(*row))
            .cloned()
            .collect();
        Page::slice_of(filtered, PageRequest::for_page(self.per_page, self.page))
    }

    fn matches<T: TableRecord>(&self, row: &T) -> bool {
        self.matches_search(row) && self.matches_tab(row) && self.matches_filters(row)
    }

    fn matches_search<T: TableRecord>(&self, row: &T) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        row.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_tab<T: TableRecord>(&self, row: &T) -> bool {
        self.tab == ALL_TAB || row.tab_value() == self.tab
    }

    fn matches_filters<T: TableRecord>(&self, row: &T) -> bool {
        self.filters
            .iter()
            .filter(|(_, wanted)| !wanted.trim().is_empty())
            .all(|(key, wanted)| match row.filter_value(key) {
                Some(value) => value.to_lowercase().contains(&wanted.trim().to_lowercase()),
                None => false,
            })
    }
}
