//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod list;
mod quantity;

use tracing::{span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ProductListModel;

pub use list::{update_item_quantity, update_list};
pub use quantity::update_quantity;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut ProductListModel, msg: Msg) -> Option<Cmd> {
    let _span = span!(Level::TRACE, "update").entered();

    let cmd = match msg {
        Msg::Quantity { item_id, msg } => update_item_quantity(model, &item_id, msg),
        Msg::List(m) => update_list(model, m),
    };

    if let Some(ref cmd) = cmd {
        tracing::debug!(?cmd, "Update produced command");
    }
    cmd
}
