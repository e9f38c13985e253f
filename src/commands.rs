//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the owning cart/order context should
//! perform after an update. The core never performs them itself.

use serde::Serialize;

use crate::model::ItemId;

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmd {
    /// Set the item's quantity (`onQuantityChange`)
    UpdateQuantity { item_id: ItemId, quantity: u32 },
    /// Remove the item from the cart (`onRemove`)
    RemoveItem { item_id: ItemId },
}

impl Cmd {
    pub fn item_id(&self) -> &ItemId {
        match self {
            Cmd::UpdateQuantity { item_id, .. } | Cmd::RemoveItem { item_id } => item_id,
        }
    }
}
