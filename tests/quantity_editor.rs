//! Quantity editor state machine tests

mod common;

use common::test_editor;

use cartlist::commands::Cmd;
use cartlist::messages::{QuantityMsg, StepDirection};
use cartlist::model::{QuantityEditor, SelectorMode};
use cartlist::update::update_quantity;

fn send(editor: &mut QuantityEditor, msgs: Vec<QuantityMsg>) -> Vec<Cmd> {
    msgs.into_iter()
        .filter_map(|msg| update_quantity(editor, msg))
        .collect()
}

fn quantities(cmds: &[Cmd]) -> Vec<u32> {
    cmds.iter()
        .map(|cmd| match cmd {
            Cmd::UpdateQuantity { quantity, .. } => *quantity,
            other => panic!("unexpected command {:?}", other),
        })
        .collect()
}

// ========================================================================
// Mode Tests
// ========================================================================

#[test]
fn test_large_values_never_in_dropdown_after_init() {
    for value in [10, 42, 9_999] {
        assert_eq!(test_editor(value, 10_000).mode(), SelectorMode::Input);
    }
}

#[test]
fn test_large_values_never_in_dropdown_after_commit() {
    let commits = [
        QuantityMsg::DropdownChanged("10".into()),
        QuantityMsg::StepPressed(StepDirection::Increment),
    ];
    for msg in commits {
        let mut e = test_editor(9, 100);
        update_quantity(&mut e, msg);
        assert!(e.committed_value() >= 10);
        assert_eq!(e.mode(), SelectorMode::Input);
    }

    let mut e = test_editor(9, 100);
    send(
        &mut e,
        vec![
            QuantityMsg::InputFocused,
            QuantityMsg::InputChanged("77".into()),
            QuantityMsg::InputBlurred,
        ],
    );
    assert_eq!(e.mode(), SelectorMode::Input);
}

#[test]
fn test_input_mode_never_returns_to_dropdown() {
    let mut e = test_editor(12, 100);
    update_quantity(&mut e, QuantityMsg::ExternalValue(2));
    assert_eq!(e.mode(), SelectorMode::Input);
    assert_eq!(e.display_text(), "2");
}

// ========================================================================
// Commit Tests
// ========================================================================

#[test]
fn test_each_commit_emits_exactly_once() {
    let mut e = test_editor(3, 100);
    let cmds = send(
        &mut e,
        vec![
            QuantityMsg::DropdownChanged("5".into()),
            QuantityMsg::InputFocused,
            QuantityMsg::InputChanged("1".into()),
            QuantityMsg::InputChanged("12".into()),
            QuantityMsg::InputChanged("123".into()),
            QuantityMsg::InputBlurred,
            QuantityMsg::StepPressed(StepDirection::Decrement),
        ],
    );
    assert_eq!(quantities(&cmds), vec![5, 100, 99]);
}

#[test]
fn test_typing_alone_never_commits() {
    let mut e = test_editor(12, 100);
    let cmds = send(
        &mut e,
        vec![
            QuantityMsg::InputFocused,
            QuantityMsg::InputChanged("4".into()),
            QuantityMsg::InputChanged("abc".into()),
            QuantityMsg::InputChanged("-1".into()),
        ],
    );
    assert!(cmds.is_empty());
}

#[test]
fn test_blur_on_blank_commits_one() {
    let mut e = test_editor(12, 100);
    let cmds = send(
        &mut e,
        vec![
            QuantityMsg::InputFocused,
            QuantityMsg::InputChanged("oops".into()),
            QuantityMsg::InputBlurred,
        ],
    );
    assert_eq!(quantities(&cmds), vec![1]);
    assert_eq!(e.display_text(), "1");
    assert_eq!(e.committed_value(), 1);
}

#[test]
fn test_emitted_values_stay_in_range() {
    let mut e = test_editor(0, 7);
    let cmds = send(
        &mut e,
        vec![
            QuantityMsg::StepPressed(StepDirection::Decrement),
            QuantityMsg::DropdownChanged("-9".into()),
            QuantityMsg::DropdownChanged("300".into()),
            QuantityMsg::StepPressed(StepDirection::Increment),
            QuantityMsg::InputChanged("99999".into()),
            QuantityMsg::InputBlurred,
        ],
    );
    for q in quantities(&cmds) {
        assert!(q <= 7, "quantity {} out of range", q);
    }
}

#[test]
fn test_increment_then_decrement_round_trips() {
    for start in [0, 1, 5, 12, 98] {
        let mut e = test_editor(start, 100);
        let cmds = send(
            &mut e,
            vec![
                QuantityMsg::StepPressed(StepDirection::Increment),
                QuantityMsg::StepPressed(StepDirection::Decrement),
            ],
        );
        assert_eq!(quantities(&cmds)[1], start as u32);
        assert_eq!(e.committed_value(), start as u32);
    }
}

// ========================================================================
// Reconciliation Tests
// ========================================================================

#[test]
fn test_reconcile_after_blur() {
    let mut e = test_editor(12, 100);
    send(
        &mut e,
        vec![
            QuantityMsg::InputFocused,
            QuantityMsg::InputChanged("20".into()),
            QuantityMsg::ExternalValue(40),
        ],
    );
    assert_eq!(e.display_text(), "20");

    // Once the shopper leaves the field the owner wins again
    send(&mut e, vec![QuantityMsg::InputBlurred, QuantityMsg::ExternalValue(40)]);
    assert_eq!(e.display_text(), "40");
    assert_eq!(e.committed_value(), 40);
}

#[test]
fn test_reconcile_clamps_external_value() {
    let mut e = test_editor(3, 8);
    update_quantity(&mut e, QuantityMsg::ExternalValue(50));
    assert_eq!(e.committed_value(), 8);
    assert_eq!(e.display_text(), "8");
    assert_eq!(e.mode(), SelectorMode::Dropdown);

    update_quantity(&mut e, QuantityMsg::ExternalValue(-3));
    assert_eq!(e.committed_value(), 0);
    assert_eq!(e.display_text(), "0");
}
