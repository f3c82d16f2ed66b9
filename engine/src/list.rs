//! Parent-owned list screen state.
//!
//! DESIGN
//! ======
//! A list screen owns one [`ListState`]. Table events are fed through
//! [`ListState::apply`], which updates pagination/search and tells the screen
//! what to do next as a [`ListEffect`]. Every fetch is tagged with a sequence
//! number; [`ListState::complete`] drops any response that is not for the
//! latest query, so a slow page-1 response cannot overwrite page 2.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::table::{Pagination, TableEvent};
use crate::value::RowId;

/// One list request. `page` is zero-based like the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub seq: u64,
}

impl ListQuery {
    /// One-based page number the backend expects.
    #[must_use]
    pub fn api_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Query-string pairs in request order; an empty search is omitted.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.api_page().to_string()), ("limit", self.limit.to_string())];
        if !self.search.trim().is_empty() {
            params.push(("search", self.search.trim().to_owned()));
        }
        params
    }
}

/// Backend page envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_count: u32,
}

/// What the screen should do after a table event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEffect {
    Fetch(ListQuery),
    Navigate(String),
    ConfirmDelete(Vec<RowId>),
}

/// Rows, pagination and search of one list screen.
#[derive(Clone, Debug)]
pub struct ListState {
    route_base: String,
    pagination: Pagination,
    search: String,
    rows: Vec<Value>,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

impl ListState {
    /// `route_base` is the screen's path, e.g. `/franchises`.
    pub fn new(route_base: impl Into<String>, limit: u32) -> Self {
        Self {
            route_base: route_base.into(),
            pagination: Pagination::new(limit),
            search: String::new(),
            rows: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
        }
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn create_route(&self) -> String {
        format!("{}/create", self.route_base)
    }

    #[must_use]
    pub fn edit_route(&self, id: &RowId) -> String {
        format!("{}/edit/{id}", self.route_base)
    }

    #[must_use]
    pub fn view_route(&self, id: &RowId) -> String {
        format!("{}/view/{id}", self.route_base)
    }

    /// Turn a table event into the next effect.
    pub fn apply(&mut self, event: TableEvent) -> ListEffect {
        match event {
            TableEvent::PageChange(page) => {
                self.pagination = self.pagination.with_page(page);
                ListEffect::Fetch(self.begin_fetch())
            }
            TableEvent::LimitChange(limit) => {
                self.pagination = self.pagination.with_limit(limit);
                ListEffect::Fetch(self.begin_fetch())
            }
            TableEvent::SearchChange(search) => {
                self.search = search;
                self.pagination = self.pagination.with_page(0);
                ListEffect::Fetch(self.begin_fetch())
            }
            TableEvent::View(id) => ListEffect::Navigate(self.view_route(&id)),
            TableEvent::Edit(id) => ListEffect::Navigate(self.edit_route(&id)),
            TableEvent::Delete(ids) => ListEffect::ConfirmDelete(ids),
        }
    }

    /// Issue a query for the current page and mark the list loading.
    pub fn begin_fetch(&mut self) -> ListQuery {
        self.seq = self.seq.wrapping_add(1);
        self.loading = true;
        ListQuery {
            page: self.pagination.page,
            limit: self.pagination.limit,
            search: self.search.clone(),
            seq: self.seq,
        }
    }

    /// Apply a fetch result. Returns `false` when the response is stale and was dropped.
    pub fn complete(&mut self, seq: u64, result: Result<Page, String>) -> bool {
        if seq != self.seq {
            log::debug!("list: dropping stale response seq={seq} latest={}", self.seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.rows = page.data;
                self.pagination = self.pagination.with_total(page.total);
                self.error = None;
            }
            Err(message) => {
                log::warn!("list: fetch failed: {message}");
                self.rows.clear();
                self.pagination = self.pagination.with_total(0);
                self.error = Some(message);
            }
        }
        true
    }

    /// Drop deleted rows locally ahead of the refetch.
    pub fn remove_rows(&mut self, ids: &[RowId]) {
        self.rows.retain(|row| RowId::of(row).is_none_or(|id| !ids.contains(&id)));
    }
}
