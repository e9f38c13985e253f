//! Application model - the complete state of the product list
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod item;
pub mod product_list;
pub mod quantity_editor;

pub use item::{Availability, Department, DepartmentId, ItemId, LineItem, UNCATEGORIZED_NAME};
pub use product_list::{ListOptions, ProductListModel};
pub use quantity_editor::{
    dropdown_options, DropdownLabel, DropdownOption, QuantityEditor, QuantityEditorConfig,
    QuantityEditorState, QuantityWidget, SelectorMode,
};
