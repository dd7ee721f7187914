use std::fmt::Write as _;

use admin_core::{IgnoreReason, RowView, Transition, ViewSnapshot};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 30;
const ROLE_WIDTH: usize = 8;

pub fn render_json(snapshot: &ViewSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

pub fn render_table(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();

    if !snapshot.table_visible() {
        out.push_str("Loading members...\n");
        return out;
    }

    let _ = writeln!(out, "Search: {}", snapshot.search_term);
    let header_box = if snapshot.page_fully_selected { "[x]" } else { "[ ]" };
    let _ = writeln!(
        out,
        "{header_box} {:<ID_WIDTH$} {:<NAME_WIDTH$} {:<EMAIL_WIDTH$} {:<ROLE_WIDTH$} actions",
        "ID", "Name", "Email", "Role"
    );

    if snapshot.rows.is_empty() {
        out.push_str("    (no members)\n");
    }
    for row in &snapshot.rows {
        render_row(&mut out, snapshot, row);
    }

    let _ = writeln!(out, "{}", pagination_bar(snapshot));
    let _ = writeln!(
        out,
        "{} of {} members shown",
        snapshot.total_matches, snapshot.total_records
    );
    if snapshot.bulk_delete_visible {
        let _ = writeln!(out, "[Delete Selected ({})]", snapshot.selected_count);
    }
    out
}

fn render_row(out: &mut String, snapshot: &ViewSnapshot, row: &RowView) {
    let check = if row.selected { "[x]" } else { "[ ]" };
    let record = &row.record;

    let draft = snapshot
        .edit
        .as_ref()
        .filter(|_| row.editing)
        .map(|edit| &edit.draft);

    let (name, email, actions) = match draft {
        Some(draft) => (
            format!("<{}>", draft.name),
            format!("<{}>", draft.email),
            "save | cancel",
        ),
        None => (record.name.clone(), record.email.clone(), "edit | delete"),
    };

    let _ = writeln!(
        out,
        "{check} {:<ID_WIDTH$} {:<NAME_WIDTH$} {:<EMAIL_WIDTH$} {:<ROLE_WIDTH$} {actions}",
        record.id.as_str(),
        name,
        email,
        record.role
    );
}

fn pagination_bar(snapshot: &ViewSnapshot) -> String {
    let mut bar = String::new();
    bar.push_str(if snapshot.first_enabled { "<< " } else { "   " });
    bar.push_str(if snapshot.prev_enabled { "< " } else { "  " });
    for page in &snapshot.page_numbers {
        if *page == snapshot.current_page {
            let _ = write!(bar, "[{page}] ");
        } else {
            let _ = write!(bar, "{page} ");
        }
    }
    bar.push_str(if snapshot.next_enabled { "> " } else { "  " });
    bar.push_str(if snapshot.last_enabled { ">>" } else { "  " });
    bar.trim_end().to_string()
}

/// Short status line for a transition. Ignored commands stay silent, except
/// for edit commands issued with no edit open.
pub fn describe_transition(transition: &Transition) -> Option<String> {
    match transition {
        Transition::Loaded { records, .. } => Some(format!("loaded {records} members")),
        Transition::LoadFailed => None,
        Transition::Searched { matches } => Some(format!("{matches} matching members")),
        Transition::PageChanged { .. } | Transition::SelectionChanged { .. } => None,
        Transition::Deleted { ids } => Some(format!("deleted {} member(s)", ids.len())),
        Transition::EditStarted { target, .. } => Some(format!("editing {target}")),
        Transition::EditUpdated { .. } => None,
        Transition::EditSaved { applied: true, target } => Some(format!("saved {target}")),
        Transition::EditSaved { applied: false, .. } => None,
        Transition::EditCancelled { .. } => Some("edit cancelled".to_string()),
        Transition::Ignored(IgnoreReason::NoActiveEdit) => {
            Some("no edit in progress".to_string())
        }
        Transition::Ignored(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
