//! Single inline edit session.
//!
//! At most one record is edited at a time. The draft is a scratch copy of the
//! editable columns and only reaches the store through [`EditSession::save`].
//! Starting a new edit while one is open abandons the old draft unsaved.

use serde::Serialize;
use shared::domain::{EditableField, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }

    pub fn get(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: EditableField, value: String) {
        match field {
            EditableField::Name => self.name = value,
            EditableField::Email => self.email = value,
        }
    }

    /// The record as it would look after saving; `id` and `role` come from
    /// `current`.
    pub fn apply_to(&self, current: &Record) -> Record {
        Record {
            id: current.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: current.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target: RecordId, draft: Draft },
}

impl EditSession {
    /// Opens an edit on `record`. Returns the target of a previously open
    /// session, whose draft is discarded.
    pub fn start(&mut self, record: &Record) -> Option<RecordId> {
        let previous = std::mem::replace(
            self,
            Self::Editing {
                target: record.id.clone(),
                draft: Draft::from_record(record),
            },
        );
        match previous {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(target),
        }
    }

    /// Updates one draft field. Returns false when no edit is open.
    pub fn change_field(&mut self, field: EditableField, value: String) -> bool {
        match self {
            Self::Idle => false,
            Self::Editing { draft, .. } => {
                draft.set(field, value);
                true
            }
        }
    }

    /// Closes the session, handing back the target and draft to merge.
    pub fn save(&mut self) -> Option<(RecordId, Draft)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing { target, draft } => Some((target, draft)),
        }
    }

    /// Closes the session without touching the store.
    pub fn cancel(&mut self) -> Option<RecordId> {
        self.save().map(|(target, _)| target)
    }

    pub fn target(&self) -> Option<&RecordId> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(target),
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_editing_record(&self, id: &RecordId) -> bool {
        self.target() == Some(id)
    }
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
