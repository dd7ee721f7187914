use serde::Serialize;
use shared::domain::{Record, RecordId};

use crate::{
    edit::Draft,
    state::{AppState, LoadStatus},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    #[serde(flatten)]
    pub record: Record,
    pub selected: bool,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditView {
    pub target: RecordId,
    pub draft: Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub load_status: LoadStatus,
    pub search_term: String,
    pub rows: Vec<RowView>,
    pub current_page: usize,
    pub page_count: usize,
    pub page_numbers: Vec<usize>,
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub total_matches: usize,
    pub total_records: usize,
    pub selected: Vec<RecordId>,
    pub selected_count: usize,
    /// Header checkbox state.
    pub page_fully_selected: bool,
    pub bulk_delete_visible: bool,
    pub edit: Option<EditView>,
}

impl AppState {
    pub fn snapshot(&self) -> ViewSnapshot {
        let current_page = self.current_page();
        let page_count = self.page_count();
        let page_ids = self.page_ids();

        let rows = self
            .page_records()
            .into_iter()
            .map(|record| RowView {
                record: record.clone(),
                selected: self.selection().is_selected(&record.id),
                editing: self.edit_session().is_editing_record(&record.id),
            })
            .collect();

        let edit = match (self.edit_session().target(), self.edit_session().draft()) {
            (Some(target), Some(draft)) => Some(EditView {
                target: target.clone(),
                draft: draft.clone(),
            }),
            _ => None,
        };

        ViewSnapshot {
            load_status: self.load_status().clone(),
            search_term: self.search_term().as_str().to_string(),
            rows,
            current_page,
            page_count,
            page_numbers: (1..=page_count).collect(),
            first_enabled: current_page > 1,
            prev_enabled: current_page > 1,
            next_enabled: current_page < page_count,
            last_enabled: current_page < page_count,
            total_matches: self.view_len(),
            total_records: self.store().len(),
            selected: self.selected_ids(),
            selected_count: self.selected_count(),
            page_fully_selected: self.selection().is_page_fully_selected(&page_ids),
            bulk_delete_visible: self.selected_count() > 0,
            edit,
        }
    }
}

impl ViewSnapshot {
    /// Whether the table body should be drawn yet.
    pub fn table_visible(&self) -> bool {
        !matches!(self.load_status, LoadStatus::Pending)
    }
}
