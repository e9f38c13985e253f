//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;

use crate::model::{Availability, DepartmentId, ItemId, LineItem};

/// Direction of a quantity step button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Increment,
    Decrement,
}

impl StepDirection {
    pub fn delta(self) -> i64 {
        match self {
            StepDirection::Increment => 1,
            StepDirection::Decrement => -1,
        }
    }
}

/// Messages for a single quantity editor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityMsg {
    // === Shopper events ===
    /// A drop-down option was picked (option value as text)
    DropdownChanged(String),
    /// The free-text field changed
    InputChanged(String),
    /// The free-text field gained focus
    InputFocused,
    /// The free-text field lost focus
    InputBlurred,
    /// A step button was pressed
    StepPressed(StepDirection),

    // === Owner events ===
    /// The authoritative quantity changed elsewhere
    ExternalValue(i64),
    /// The maximum orderable quantity changed
    SetMaxValue(u32),
    /// Enable or disable shopper interaction
    SetDisabled(bool),
}

impl QuantityMsg {
    /// Check if this message originates from the shopper's widgets
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            QuantityMsg::DropdownChanged(_)
                | QuantityMsg::InputChanged(_)
                | QuantityMsg::InputFocused
                | QuantityMsg::InputBlurred
                | QuantityMsg::StepPressed(_)
        )
    }
}

/// Messages for the product list as a whole
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMsg {
    /// Replace the item snapshot (the provider delivered a new list)
    SetItems(Vec<LineItem>),
    /// The shopper asked to remove an item
    RemoveItem(ItemId),
    /// Collapse or expand a department group within a section
    ToggleDepartment {
        section: Availability,
        department: DepartmentId,
    },
    /// Switch department grouping on or off
    SetGroupByDepartment(bool),
    /// The cart is being updated; editors are disabled meanwhile
    SetLoading(bool),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    /// Quantity editor message addressed to one item
    Quantity { item_id: ItemId, msg: QuantityMsg },
    /// List-level message
    List(ListMsg),
}

impl Msg {
    pub fn quantity(item_id: impl Into<String>, msg: QuantityMsg) -> Self {
        Msg::Quantity {
            item_id: ItemId::new(item_id),
            msg,
        }
    }
}
