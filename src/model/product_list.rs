//! Product list model - the composition root of the cart view
//!
//! Holds the current item snapshot and one quantity editor per item,
//! keyed by item id.

use std::collections::{HashMap, HashSet};

use super::item::{Availability, DepartmentId, ItemId, LineItem};
use super::quantity_editor::{QuantityEditor, QuantityEditorConfig, SelectorMode};
use crate::config::ProductListConfig;
use crate::grouping::{group_products, ProductLayout};

/// List-wide options applied to every editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub group_by_department: bool,
    pub quantity_buttons: bool,
    pub selector: SelectorMode,
    pub decrement_floor: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::from(&ProductListConfig::default())
    }
}

impl From<&ProductListConfig> for ListOptions {
    fn from(config: &ProductListConfig) -> Self {
        Self {
            group_by_department: config.group_by_department,
            quantity_buttons: config.quantity_buttons,
            selector: config.selector,
            decrement_floor: config.decrement_floor,
        }
    }
}

/// The complete product list state
#[derive(Debug, Clone)]
pub struct ProductListModel {
    /// Current snapshot, in provider order
    pub(crate) items: Vec<LineItem>,
    pub(crate) editors: HashMap<ItemId, QuantityEditor>,
    pub(crate) collapsed: HashSet<(Availability, DepartmentId)>,
    pub(crate) loading: bool,
    pub options: ListOptions,
}

impl ProductListModel {
    pub fn new(items: Vec<LineItem>, options: ListOptions) -> Self {
        let mut model = Self {
            items: Vec::new(),
            editors: HashMap::new(),
            collapsed: HashSet::new(),
            loading: false,
            options,
        };
        model.replace_items(items);
        model
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.unique_id == id)
    }

    pub fn editor(&self, id: &ItemId) -> Option<&QuantityEditor> {
        self.editors.get(id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_collapsed(&self, section: Availability, department: &DepartmentId) -> bool {
        self.collapsed.contains(&(section, department.clone()))
    }

    /// Renderable structure for the current snapshot
    pub fn layout(&self) -> ProductLayout<'_> {
        group_products(&self.items, self.options.group_by_department)
    }

    /// Editor configuration for `item` under the current options
    pub fn editor_config(&self, item: &LineItem) -> QuantityEditorConfig {
        QuantityEditorConfig {
            max_value: item.max_quantity,
            preferred_mode: self.options.selector,
            show_step_buttons: self.options.quantity_buttons,
            disabled: self.loading,
            decrement_floor: self.options.decrement_floor,
        }
    }

    /// Swap in a new snapshot, creating editors for new ids and dropping
    /// editors whose item disappeared. Surviving editors are left as they
    /// are; the caller reconciles them.
    pub(crate) fn replace_items(&mut self, items: Vec<LineItem>) -> Vec<ItemId> {
        let mut surviving = Vec::new();
        for item in &items {
            if self.editors.contains_key(&item.unique_id) {
                surviving.push(item.unique_id.clone());
            } else {
                let config = self.editor_config(item);
                let editor = QuantityEditor::new(item.unique_id.clone(), item.quantity, config);
                self.editors.insert(item.unique_id.clone(), editor);
            }
        }

        let live: HashSet<&ItemId> = items.iter().map(|i| &i.unique_id).collect();
        self.editors.retain(|id, _| live.contains(id));
        self.items = items;
        surviving
    }
}
