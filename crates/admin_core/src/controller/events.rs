//! Commands accepted by the admin table and the transitions they produce.

use shared::domain::{EditableField, Record, RecordId};

use crate::pager::PageNav;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(Vec<Record>),
    LoadFailed(String),
    Search(String),
    GotoPage(PageNav),
    ToggleSelect(RecordId),
    ToggleSelectAllOnPage,
    DeleteOne(RecordId),
    DeleteSelected,
    StartEdit(RecordId),
    EditField(EditableField, String),
    SaveEdit,
    CancelEdit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::LoadFailed(_) => "load_failed",
            Self::Search(_) => "search",
            Self::GotoPage(_) => "goto_page",
            Self::ToggleSelect(_) => "toggle_select",
            Self::ToggleSelectAllOnPage => "toggle_select_all_on_page",
            Self::DeleteOne(_) => "delete_one",
            Self::DeleteSelected => "delete_selected",
            Self::StartEdit(_) => "start_edit",
            Self::EditField(..) => "edit_field",
            Self::SaveEdit => "save_edit",
            Self::CancelEdit => "cancel_edit",
        }
    }
}

/// Why a command left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The referenced record is no longer in the store.
    StaleTarget(RecordId),
    NoActiveEdit,
    NothingSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Loaded {
        records: usize,
        duplicates_dropped: usize,
    },
    LoadFailed,
    Searched {
        matches: usize,
    },
    PageChanged {
        page: usize,
    },
    SelectionChanged {
        selected: usize,
    },
    Deleted {
        ids: Vec<RecordId>,
    },
    EditStarted {
        target: RecordId,
        abandoned: Option<RecordId>,
    },
    EditUpdated {
        field: EditableField,
    },
    EditSaved {
        target: RecordId,
        /// False when the target was deleted while the edit was open.
        applied: bool,
    },
    EditCancelled {
        target: RecordId,
    },
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
