use super::*;

// =============================================================
// Notice queue
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push_error("first");
    let b = state.push_success("second");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_records_level_and_message() {
    let mut state = NoticeState::default();
    state.push_error("broken");
    assert_eq!(state.items[0].level, NoticeLevel::Error);
    assert_eq!(state.items[0].message, "broken");
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push_error("first");
    let b = state.push_error("second");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = NoticeState::default();
    state.push_error("only");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
