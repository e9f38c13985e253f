//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cartlist::model::{
    Availability, ItemId, LineItem, ListOptions, ProductListModel, QuantityEditor,
    QuantityEditorConfig,
};

/// An available item in department `dept`
pub fn available(id: &str, dept: &str) -> LineItem {
    LineItem::new(id, Availability::Available, 1).with_department(dept, &dept_name(dept))
}

/// An unavailable item in department `dept`
pub fn unavailable(id: &str, dept: &str) -> LineItem {
    LineItem::new(id, Availability::Unavailable, 1).with_department(dept, &dept_name(dept))
}

pub fn dept_name(dept: &str) -> String {
    format!("Department {}", dept)
}

/// `[A(avail,X), B(unavail,Y), C(avail,X), D(avail,Z)]`
pub fn mixed_cart() -> Vec<LineItem> {
    vec![
        available("A", "X"),
        unavailable("B", "Y"),
        available("C", "X"),
        available("D", "Z"),
    ]
}

/// Ids of a slice of item references, in order
pub fn ids(items: &[&LineItem]) -> Vec<String> {
    items.iter().map(|i| i.unique_id.to_string()).collect()
}

/// Standalone editor for item "sku"
pub fn test_editor(value: i64, max_value: u32) -> QuantityEditor {
    QuantityEditor::new(
        ItemId::from("sku"),
        value,
        QuantityEditorConfig::with_max_value(max_value),
    )
}

/// List model over `items` with department grouping set as given
pub fn test_model(items: Vec<LineItem>, group_by_department: bool) -> ProductListModel {
    let options = ListOptions {
        group_by_department,
        ..ListOptions::default()
    };
    ProductListModel::new(items, options)
}
