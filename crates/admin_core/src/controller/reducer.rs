//! Reducer: applies one command to the aggregate and refreshes derived views.

use shared::domain::{EditableField, Record, RecordId};
use tracing::{debug, error, info};

use crate::{
    controller::events::{Command, IgnoreReason, Transition},
    filter::SearchTerm,
    pager::PageNav,
    selection::PageToggle,
    state::{AppState, LoadStatus},
};

impl AppState {
    /// Applies `command` and returns what changed. Derived views are rebuilt
    /// before this returns, so any read afterwards sees a consistent state.
    pub fn apply(&mut self, command: Command) -> Transition {
        let command_name = command.name();
        let transition = match command {
            Command::Load(records) => self.load(records),
            Command::LoadFailed(message) => self.load_failed(message),
            Command::Search(term) => self.search(term),
            Command::GotoPage(nav) => self.goto_page(nav),
            Command::ToggleSelect(id) => self.toggle_select(id),
            Command::ToggleSelectAllOnPage => self.toggle_select_all_on_page(),
            Command::DeleteOne(id) => self.delete_one(id),
            Command::DeleteSelected => self.delete_selected(),
            Command::StartEdit(id) => self.start_edit(id),
            Command::EditField(field, value) => self.edit_field(field, value),
            Command::SaveEdit => self.save_edit(),
            Command::CancelEdit => self.cancel_edit(),
        };
        self.refresh();

        match &transition {
            Transition::Ignored(reason) => {
                debug!(command = command_name, ?reason, "admin: command ignored")
            }
            other => debug!(
                command = command_name,
                transition = ?other,
                page = self.current_page(),
                page_count = self.page_count(),
                selected = self.selected_count(),
                "admin: command applied"
            ),
        }
        transition
    }

    fn load(&mut self, records: Vec<Record>) -> Transition {
        let duplicates_dropped = self.store.load(records);
        self.selection.clear_all();
        self.edit.cancel();
        self.pager.reset();
        self.load_status = LoadStatus::Ready;
        info!(
            records = self.store.len(),
            duplicates_dropped, "admin: records loaded"
        );
        Transition::Loaded {
            records: self.store.len(),
            duplicates_dropped,
        }
    }

    fn load_failed(&mut self, message: String) -> Transition {
        error!(error = %message, "admin: record load failed; table stays empty");
        self.store.load(Vec::new());
        self.selection.clear_all();
        self.edit.cancel();
        self.pager.reset();
        self.load_status = LoadStatus::Failed { message };
        Transition::LoadFailed
    }

    fn search(&mut self, term: String) -> Transition {
        self.search = SearchTerm::new(term);
        self.pager.reset();
        self.refresh();
        Transition::Searched {
            matches: self.view_len(),
        }
    }

    fn goto_page(&mut self, nav: PageNav) -> Transition {
        let page = self.pager.navigate(nav, self.view_len());
        Transition::PageChanged { page }
    }

    fn toggle_select(&mut self, id: RecordId) -> Transition {
        if !self.store.contains(&id) {
            return Transition::Ignored(IgnoreReason::StaleTarget(id));
        }
        self.selection.toggle(&id);
        Transition::SelectionChanged {
            selected: self.selection.selected_count(),
        }
    }

    fn toggle_select_all_on_page(&mut self) -> Transition {
        let page_ids = self.page_ids();
        match self.selection.toggle_all_on_page(&page_ids) {
            PageToggle::Selected { added } => debug!(added, "admin: page rows selected"),
            PageToggle::Cleared { removed } => debug!(removed, "admin: selection cleared"),
        }
        Transition::SelectionChanged {
            selected: self.selection.selected_count(),
        }
    }

    fn delete_one(&mut self, id: RecordId) -> Transition {
        match self.store.delete_one(&id) {
            Some(removed) => Transition::Deleted {
                ids: vec![removed.id],
            },
            None => Transition::Ignored(IgnoreReason::StaleTarget(id)),
        }
    }

    fn delete_selected(&mut self) -> Transition {
        if self.selection.selected_count() == 0 {
            return Transition::Ignored(IgnoreReason::NothingSelected);
        }
        let ids = self.selection.take();
        let removed = self.store.delete_many(&ids);
        Transition::Deleted { ids: removed }
    }

    fn start_edit(&mut self, id: RecordId) -> Transition {
        let Some(record) = self.store.get(&id) else {
            return Transition::Ignored(IgnoreReason::StaleTarget(id));
        };
        let abandoned = self.edit.start(record);
        if let Some(previous) = &abandoned {
            debug!(record_id = %previous, "admin: unsaved draft abandoned");
        }
        Transition::EditStarted {
            target: id,
            abandoned,
        }
    }

    fn edit_field(&mut self, field: EditableField, value: String) -> Transition {
        if self.edit.change_field(field, value) {
            Transition::EditUpdated { field }
        } else {
            Transition::Ignored(IgnoreReason::NoActiveEdit)
        }
    }

    fn save_edit(&mut self) -> Transition {
        let Some((target, draft)) = self.edit.save() else {
            return Transition::Ignored(IgnoreReason::NoActiveEdit);
        };
        let applied = match self.store.get(&target) {
            Some(current) => {
                let updated = draft.apply_to(current);
                self.store.update_one(&target, updated)
            }
            None => false,
        };
        if !applied {
            debug!(record_id = %target, "admin: edit target gone; save dropped");
        }
        Transition::EditSaved { target, applied }
    }

    fn cancel_edit(&mut self) -> Transition {
        match self.edit.cancel() {
            Some(target) => Transition::EditCancelled { target },
            None => Transition::Ignored(IgnoreReason::NoActiveEdit),
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
