use super::*;

use admin_core::{AppState, Command, PageNav};
use shared::domain::{EditableField, Record, RecordId};

fn state_with(count: usize) -> AppState {
    let mut state = AppState::new();
    state.apply(Command::Load(
        (1..=count)
            .map(|n| {
                Record::new(
                    n.to_string(),
                    format!("Member {n}"),
                    format!("m{n}@mailinator.com"),
                    "member",
                )
            })
            .collect(),
    ));
    state
}

#[test]
fn pending_state_renders_loading_notice_only() {
    let rendered = render_table(&AppState::new().snapshot());
    assert_eq!(rendered, "Loading members...\n");
}

#[test]
fn renders_rows_and_pagination() {
    let mut state = state_with(12);
    state.apply(Command::ToggleSelect(RecordId::from("2")));

    let rendered = render_table(&state.snapshot());

    assert!(rendered.contains("[x] 2 "));
    assert!(rendered.contains("[ ] 1 "));
    assert!(rendered.contains("    [1] 2 > >>"));
    assert!(rendered.contains("12 of 12 members shown"));
    assert!(rendered.contains("[Delete Selected (1)]"));
    assert!(!rendered.contains("Member 11"));
}

#[test]
fn editing_row_shows_draft_and_save_controls() {
    let mut state = state_with(3);
    state.apply(Command::StartEdit(RecordId::from("3")));
    state.apply(Command::EditField(EditableField::Name, "Draft Name".into()));

    let rendered = render_table(&state.snapshot());

    assert!(rendered.contains("<Draft Name>"));
    assert!(rendered.contains("save | cancel"));
    assert!(rendered.contains("Member 1 "));
}

#[test]
fn empty_search_result_says_so() {
    let mut state = state_with(3);
    state.apply(Command::Search("nobody".into()));

    let rendered = render_table(&state.snapshot());

    assert!(rendered.contains("(no members)"));
    assert!(!rendered.contains("Delete Selected"));
}

#[test]
fn last_page_disables_forward_navigation() {
    let mut state = state_with(12);
    state.apply(Command::GotoPage(PageNav::Last));

    let rendered = render_table(&state.snapshot());

    assert!(rendered.contains("<< < 1 [2]"));
    assert!(!rendered.contains(">>"));
}

#[test]
fn json_rendering_is_single_line() {
    let state = state_with(2);
    let json = render_json(&state.snapshot()).expect("json");
    assert!(!json.contains('\n'));
    assert!(json.contains("\"current_page\":1"));
}

#[test]
fn stale_targets_stay_silent() {
    assert_eq!(
        describe_transition(&Transition::Ignored(IgnoreReason::StaleTarget(
            RecordId::from("9")
        ))),
        None
    );
    assert_eq!(
        describe_transition(&Transition::Deleted {
            ids: vec![RecordId::from("1"), RecordId::from("2")]
        }),
        Some("deleted 2 member(s)".to_string())
    );
}
