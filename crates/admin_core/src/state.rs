//! The single owned aggregate behind the admin table.
//!
//! `AppState` holds the canonical store together with search, paging,
//! selection and edit state. The filtered view is cached as indices into the
//! store and rebuilt by [`AppState::refresh`] after every transition, which
//! also re-clamps the page and prunes stale selections. Nothing outside this
//! crate can observe the state between a mutation and its refresh.

use std::num::NonZeroUsize;

use serde::Serialize;
use shared::domain::{Record, RecordId};

use crate::{
    edit::EditSession,
    filter::{self, SearchTerm},
    pager::PageState,
    selection::SelectionTracker,
    store::RecordStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Initial fetch not finished; the table is not rendered yet.
    #[default]
    Pending,
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) store: RecordStore,
    pub(crate) search: SearchTerm,
    pub(crate) pager: PageState,
    pub(crate) selection: SelectionTracker,
    pub(crate) edit: EditSession,
    pub(crate) load_status: LoadStatus,
    view: Vec<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            pager: PageState::new(page_size),
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.pager.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.view.len())
    }

    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// Records matching the search term, in store order.
    pub fn view_records(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.store.records();
        self.view.iter().map(move |&index| &records[index])
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        let records = self.store.records();
        let (page, _) = self.pager.page(&self.view);
        page.iter().map(|&index| &records[index]).collect()
    }

    pub fn page_ids(&self) -> Vec<RecordId> {
        self.page_records()
            .into_iter()
            .map(|record| record.id.clone())
            .collect()
    }

    /// Selected ids in store order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.store
            .records()
            .iter()
            .filter(|record| self.selection.is_selected(&record.id))
            .map(|record| record.id.clone())
            .collect()
    }

    /// Rebuilds every derived view from the store and search term.
    pub(crate) fn refresh(&mut self) {
        self.view = filter::apply(self.store.records(), &self.search);
        self.pager.clamp(self.view.len());
        let store = &self.store;
        self.selection.prune(|id| store.contains(id));
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
