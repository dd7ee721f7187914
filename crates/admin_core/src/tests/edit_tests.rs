use super::*;

fn aaron() -> Record {
    Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member")
}

fn aishwarya() -> Record {
    Record::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin")
}

#[test]
fn start_copies_editable_fields_into_draft() {
    let mut session = EditSession::default();
    assert_eq!(session.start(&aaron()), None);

    assert_eq!(session.target(), Some(&RecordId::from("1")));
    let draft = session.draft().expect("draft");
    assert_eq!(draft.get(EditableField::Name), "Aaron Miles");
    assert_eq!(draft.get(EditableField::Email), "aaron@mailinator.com");
}

#[test]
fn change_field_only_touches_the_draft() {
    let record = aaron();
    let mut session = EditSession::default();
    session.start(&record);

    assert!(session.change_field(EditableField::Name, "A. Miles".into()));

    assert_eq!(session.draft().expect("draft").name, "A. Miles");
    assert_eq!(record.name, "Aaron Miles");
}

#[test]
fn change_field_without_session_is_rejected() {
    let mut session = EditSession::default();
    assert!(!session.change_field(EditableField::Email, "x@y".into()));
    assert!(!session.is_editing());
}

#[test]
fn save_hands_back_draft_and_returns_to_idle() {
    let mut session = EditSession::default();
    session.start(&aaron());
    session.change_field(EditableField::Email, "miles@mailinator.com".into());

    let (target, draft) = session.save().expect("open session");

    assert_eq!(target, RecordId::from("1"));
    assert_eq!(draft.email, "miles@mailinator.com");
    assert_eq!(session, EditSession::Idle);
    assert!(session.save().is_none());
}

#[test]
fn cancel_discards_draft() {
    let mut session = EditSession::default();
    session.start(&aaron());
    session.change_field(EditableField::Name, "discard me".into());

    assert_eq!(session.cancel(), Some(RecordId::from("1")));
    assert!(session.draft().is_none());
    assert_eq!(session.cancel(), None);
}

#[test]
fn starting_another_edit_abandons_the_open_draft() {
    let mut session = EditSession::default();
    session.start(&aaron());
    session.change_field(EditableField::Name, "lost".into());

    let abandoned = session.start(&aishwarya());

    assert_eq!(abandoned, Some(RecordId::from("1")));
    assert!(session.is_editing_record(&RecordId::from("2")));
    assert_eq!(session.draft().expect("draft").name, "Aishwarya Naik");
}

#[test]
fn draft_apply_keeps_id_and_role() {
    let mut draft = Draft::from_record(&aishwarya());
    draft.set(EditableField::Name, "Aish".into());

    let merged = draft.apply_to(&aishwarya());

    assert_eq!(merged.id, RecordId::from("2"));
    assert_eq!(merged.role, "admin");
    assert_eq!(merged.name, "Aish");
    assert_eq!(merged.email, "aishwarya@mailinator.com");
}
