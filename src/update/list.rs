//! Product list update handlers

use crate::commands::Cmd;
use crate::messages::{ListMsg, QuantityMsg};
use crate::model::{ItemId, ProductListModel};

use super::quantity::update_quantity;

/// Handle list-level messages
pub fn update_list(model: &mut ProductListModel, msg: ListMsg) -> Option<Cmd> {
    match msg {
        ListMsg::SetItems(items) => {
            let surviving = model.replace_items(items);
            for id in surviving {
                let Some(item) = model.item(&id) else {
                    continue;
                };
                let (max_value, quantity) = (item.max_quantity, item.quantity);
                if let Some(editor) = model.editors.get_mut(&id) {
                    update_quantity(editor, QuantityMsg::SetMaxValue(max_value));
                    update_quantity(editor, QuantityMsg::ExternalValue(quantity));
                }
            }
            tracing::debug!(items = model.items.len(), "Item snapshot replaced");
            None
        }

        ListMsg::RemoveItem(item_id) => {
            if model.item(&item_id).is_none() {
                tracing::warn!(item = %item_id, "Remove requested for unknown item");
                return None;
            }
            Some(Cmd::RemoveItem { item_id })
        }

        ListMsg::ToggleDepartment {
            section,
            department,
        } => {
            let key = (section, department);
            if !model.collapsed.remove(&key) {
                model.collapsed.insert(key);
            }
            None
        }

        ListMsg::SetGroupByDepartment(enabled) => {
            model.options.group_by_department = enabled;
            None
        }

        ListMsg::SetLoading(loading) => {
            model.loading = loading;
            for editor in model.editors.values_mut() {
                update_quantity(editor, QuantityMsg::SetDisabled(loading));
            }
            None
        }
    }
}

/// Route a quantity message to the editor of `item_id`
pub fn update_item_quantity(
    model: &mut ProductListModel,
    item_id: &ItemId,
    msg: QuantityMsg,
) -> Option<Cmd> {
    match model.editors.get_mut(item_id) {
        Some(editor) => update_quantity(editor, msg),
        None => {
            tracing::warn!(item = %item_id, "Quantity message for unknown item");
            None
        }
    }
}
