use std::collections::HashSet;

use shared::domain::RecordId;

/// Result of the header checkbox toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToggle {
    /// Page ids were unioned into the selection; `added` were new.
    Selected { added: usize },
    /// The page was already fully selected, so the whole selection was cleared.
    Cleared { removed: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<RecordId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Header checkbox semantics: when every id on the page is already
    /// selected the entire selection is cleared, including ids chosen on other
    /// pages. Otherwise the page ids are added to the existing selection.
    pub fn toggle_all_on_page(&mut self, page_ids: &[RecordId]) -> PageToggle {
        if page_ids.iter().all(|id| self.selected.contains(id)) {
            PageToggle::Cleared {
                removed: self.clear_all(),
            }
        } else {
            let added = page_ids
                .iter()
                .filter(|id| self.selected.insert((*id).clone()))
                .count();
            PageToggle::Selected { added }
        }
    }

    /// Checked state of the header checkbox: a non-empty page with every row
    /// selected.
    pub fn is_page_fully_selected(&self, page_ids: &[RecordId]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.selected.len();
        self.selected.clear();
        removed
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn ids(&self) -> &HashSet<RecordId> {
        &self.selected
    }

    /// Drops ids for which `exists` returns false.
    pub fn prune(&mut self, mut exists: impl FnMut(&RecordId) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| exists(id));
        before - self.selected.len()
    }

    pub fn take(&mut self) -> HashSet<RecordId> {
        std::mem::take(&mut self.selected)
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
