//! Quantity editor transitions
//!
//! Every committing transition returns exactly one [`Cmd::UpdateQuantity`]
//! whose quantity lies within `[0, max_value]`. Typing alone never commits.

use crate::commands::Cmd;
use crate::messages::QuantityMsg;
use crate::model::{QuantityEditor, SelectorMode};
use crate::util::{
    clamp_to_range, parse_committed, parse_display, truncate_input, INPUT_MODE_THRESHOLD,
};

/// Apply one message to a quantity editor
pub fn update_quantity(editor: &mut QuantityEditor, msg: QuantityMsg) -> Option<Cmd> {
    if editor.config.disabled && msg.is_user_event() {
        tracing::debug!(item = %editor.item_id, ?msg, "Quantity editor disabled, ignoring");
        return None;
    }

    let max_value = editor.config.max_value;

    match msg {
        QuantityMsg::DropdownChanged(text) => {
            let committed = parse_committed(&text, max_value);
            editor.display_text = parse_display(&text, max_value);
            Some(commit(editor, committed))
        }

        QuantityMsg::InputChanged(text) => {
            editor.display_text = parse_display(truncate_input(&text), max_value);
            None
        }

        QuantityMsg::InputFocused => {
            editor.is_editing = true;
            None
        }

        QuantityMsg::InputBlurred => {
            editor.is_editing = false;
            if editor.display_text.is_empty() {
                editor.display_text = "1".to_string();
            }
            let committed = parse_committed(&editor.display_text, max_value);
            Some(commit(editor, committed))
        }

        QuantityMsg::StepPressed(direction) => {
            let current = parse_committed(&editor.display_text, max_value);
            let next = clamp_to_range(
                current + direction.delta(),
                editor.config.decrement_floor,
                max_value,
            );
            editor.display_text = next.to_string();
            Some(commit(editor, i64::from(next)))
        }

        QuantityMsg::ExternalValue(value) => {
            reconcile(editor, value);
            None
        }

        QuantityMsg::SetMaxValue(max) => {
            editor.config.max_value = max;
            if !editor.is_editing && !editor.display_text.is_empty() {
                editor.display_text = parse_display(&editor.display_text, max);
            }
            reconcile(editor, i64::from(editor.committed_value));
            None
        }

        QuantityMsg::SetDisabled(disabled) => {
            editor.config.disabled = disabled;
            None
        }
    }
}

/// Record a committed value and build the command reporting it
fn commit(editor: &mut QuantityEditor, value: i64) -> Cmd {
    let quantity = clamp_to_range(value, 0, editor.config.max_value);
    if i64::from(quantity) >= INPUT_MODE_THRESHOLD && editor.mode == SelectorMode::Dropdown {
        tracing::debug!(item = %editor.item_id, quantity, "Switching quantity editor to input");
        editor.mode = SelectorMode::Input;
    }
    editor.committed_value = quantity;
    tracing::debug!(item = %editor.item_id, quantity, "Quantity committed");

    Cmd::UpdateQuantity {
        item_id: editor.item_id.clone(),
        quantity,
    }
}

/// Bring the editor in line with an authoritative external value.
///
/// The committed value always follows the owner. The display text is only
/// rewritten when the shopper is not typing and it disagrees.
fn reconcile(editor: &mut QuantityEditor, value: i64) -> bool {
    let max_value = editor.config.max_value;
    let normalized = clamp_to_range(value, 0, max_value);
    editor.committed_value = normalized;

    if editor.is_editing || i64::from(normalized) == parse_committed(&editor.display_text, max_value)
    {
        return false;
    }

    if i64::from(normalized) >= INPUT_MODE_THRESHOLD {
        editor.mode = SelectorMode::Input;
    }
    editor.display_text = parse_display(&normalized.to_string(), max_value);
    tracing::debug!(item = %editor.item_id, value = normalized, "Quantity editor resynchronized");
    true
}
