//! Quantity editor state
//!
//! One editor per line item. The value can be edited through a bounded
//! drop-down or a free-text field; transitions live in
//! [`crate::update::update_quantity`].

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::item::ItemId;
use crate::util::{clamp_to_range, INPUT_MODE_THRESHOLD, MAX_INPUT_LENGTH};

/// Largest count listed individually in the drop-down
const DROPDOWN_MAX_LISTED: u32 = 9;

/// Which input affordance is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorMode {
    #[default]
    Dropdown,
    Input,
}

/// Owner-supplied configuration of a quantity editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEditorConfig {
    /// Maximum orderable quantity
    pub max_value: u32,
    /// Mode used for small initial values
    pub preferred_mode: SelectorMode,
    /// Show +/- buttons next to the free-text field
    pub show_step_buttons: bool,
    /// Shopper events are ignored while disabled
    pub disabled: bool,
    /// Lowest value a decrement step can reach
    pub decrement_floor: i64,
}

impl Default for QuantityEditorConfig {
    fn default() -> Self {
        Self {
            max_value: 99_999,
            preferred_mode: SelectorMode::Dropdown,
            show_step_buttons: false,
            disabled: false,
            decrement_floor: 0,
        }
    }
}

impl QuantityEditorConfig {
    pub fn with_max_value(max_value: u32) -> Self {
        Self {
            max_value,
            ..Self::default()
        }
    }
}

/// Label of a drop-down option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownLabel {
    /// Zero quantity, i.e. remove the item
    Remove,
    Count(u32),
    /// Sentinel that switches to the free-text field
    TenPlus,
}

impl fmt::Display for DropdownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropdownLabel::Remove => f.write_str("0 - remove"),
            DropdownLabel::Count(n) => write!(f, "{}", n),
            DropdownLabel::TenPlus => f.write_str("10+"),
        }
    }
}

impl Serialize for DropdownLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One entry of the quantity drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: u32,
    pub label: DropdownLabel,
}

/// Options offered by the drop-down for a given maximum.
///
/// `0` (remove), then `1..=min(9, max_value)`, then a `10+` sentinel only
/// when `max_value >= 10`.
pub fn dropdown_options(max_value: u32) -> Vec<DropdownOption> {
    let limit = max_value.min(DROPDOWN_MAX_LISTED);
    let mut options = Vec::with_capacity(limit as usize + 2);
    options.push(DropdownOption {
        value: 0,
        label: DropdownLabel::Remove,
    });
    options.extend((1..=limit).map(|n| DropdownOption {
        value: n,
        label: DropdownLabel::Count(n),
    }));
    if max_value > DROPDOWN_MAX_LISTED {
        options.push(DropdownOption {
            value: DROPDOWN_MAX_LISTED + 1,
            label: DropdownLabel::TenPlus,
        });
    }
    options
}

/// Snapshot of the editor handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityEditorState {
    pub committed_value: u32,
    pub display_text: String,
    pub mode: SelectorMode,
    pub is_editing: bool,
}

/// The concrete widget the surface should bind for the current mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QuantityWidget {
    Dropdown {
        options: Vec<DropdownOption>,
        selected: u32,
        disabled: bool,
    },
    Input {
        text: String,
        max_length: usize,
        step_buttons: bool,
        disabled: bool,
    },
}

/// Quantity editing state machine for one line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEditor {
    pub item_id: ItemId,
    pub config: QuantityEditorConfig,
    pub(crate) mode: SelectorMode,
    /// Always within `[0, max_value]`
    pub(crate) committed_value: u32,
    pub(crate) display_text: String,
    pub(crate) is_editing: bool,
}

impl QuantityEditor {
    /// Create an editor for `value`.
    ///
    /// Values of ten or more always start in [`SelectorMode::Input`].
    pub fn new(item_id: ItemId, value: i64, config: QuantityEditorConfig) -> Self {
        let mode = if value >= INPUT_MODE_THRESHOLD {
            SelectorMode::Input
        } else {
            config.preferred_mode
        };
        let committed_value = clamp_to_range(value, 0, config.max_value);

        Self {
            item_id,
            mode,
            committed_value,
            display_text: committed_value.to_string(),
            is_editing: false,
            config,
        }
    }

    pub fn mode(&self) -> SelectorMode {
        self.mode
    }

    pub fn committed_value(&self) -> u32 {
        self.committed_value
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn state(&self) -> QuantityEditorState {
        QuantityEditorState {
            committed_value: self.committed_value,
            display_text: self.display_text.clone(),
            mode: self.mode,
            is_editing: self.is_editing,
        }
    }

    pub fn widget(&self) -> QuantityWidget {
        match self.mode {
            SelectorMode::Dropdown => QuantityWidget::Dropdown {
                options: dropdown_options(self.config.max_value),
                selected: self.committed_value,
                disabled: self.config.disabled,
            },
            SelectorMode::Input => QuantityWidget::Input {
                text: self.display_text.clone(),
                max_length: MAX_INPUT_LENGTH,
                step_buttons: self.config.show_step_buttons,
                disabled: self.config.disabled,
            },
        }
    }
}
