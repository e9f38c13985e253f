//! Line items as delivered by the cart/order provider
//!
//! The core treats these as read-only snapshots.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name of the bucket for items without a usable department
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Unique identifier of a line item within a list snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Availability status of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    Available,
    /// Anything the provider reports other than `available`
    #[serde(other)]
    Unavailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

/// Department identifier derived from a category path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentId {
    Category(String),
    Uncategorized,
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentId::Category(id) => f.write_str(id),
            DepartmentId::Uncategorized => f.write_str("uncategorized"),
        }
    }
}

/// A department: identifier plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    pub fn uncategorized() -> Self {
        Self {
            id: DepartmentId::Uncategorized,
            name: UNCATEGORIZED_NAME.to_string(),
        }
    }
}

/// A single product entry in the shopper's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub unique_id: ItemId,
    #[serde(default)]
    pub name: String,
    pub availability: Availability,
    pub quantity: i64,
    /// Maximum orderable quantity
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
    /// Category path of ids, e.g. `/1/10/`; the first segment is the department
    #[serde(default)]
    pub product_category_ids: String,
    /// Category id to display name
    #[serde(default)]
    pub product_categories: HashMap<String, String>,
}

fn default_max_quantity() -> u32 {
    99_999
}

impl LineItem {
    /// Build an item with an empty category path
    pub fn new(id: impl Into<String>, availability: Availability, quantity: i64) -> Self {
        Self {
            unique_id: ItemId::new(id),
            name: String::new(),
            availability,
            quantity,
            max_quantity: default_max_quantity(),
            product_category_ids: String::new(),
            product_categories: HashMap::new(),
        }
    }

    /// Builder: set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set the maximum orderable quantity
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    /// Builder: place the item in a department (`/<id>/` path plus its name)
    pub fn with_department(mut self, id: &str, name: &str) -> Self {
        self.product_category_ids = format!("/{}/", id);
        self.product_categories
            .insert(id.to_string(), name.to_string());
        self
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Department id: the first non-empty segment of the category path
    pub fn department_id(&self) -> DepartmentId {
        self.department().id
    }

    /// Department of this item; total, falls back to [`Department::uncategorized`]
    pub fn department(&self) -> Department {
        let Some(id) = self.category_segment() else {
            return Department::uncategorized();
        };
        match self.product_categories.get(id) {
            Some(name) => Department {
                id: DepartmentId::Category(id.to_string()),
                name: name.clone(),
            },
            None => Department::uncategorized(),
        }
    }

    fn category_segment(&self) -> Option<&str> {
        self.product_category_ids
            .split('/')
            .map(str::trim)
            .find(|segment| !segment.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_from_category_path() {
        let mut item = LineItem::new("a", Availability::Available, 1);
        item.product_category_ids = "/1/10/".to_string();
        item.product_categories.insert("1".into(), "Grocery".into());
        item.product_categories.insert("10".into(), "Fruit".into());

        let dept = item.department();
        assert_eq!(dept.id, DepartmentId::Category("1".into()));
        assert_eq!(dept.name, "Grocery");
        assert_eq!(item.department_id(), dept.id);
    }

    #[test]
    fn test_department_missing_path_is_uncategorized() {
        let item = LineItem::new("a", Availability::Available, 1);
        assert_eq!(item.department(), Department::uncategorized());
        assert_eq!(item.department_id(), DepartmentId::Uncategorized);
    }

    #[test]
    fn test_department_missing_name_is_uncategorized() {
        let mut item = LineItem::new("a", Availability::Available, 1);
        item.product_category_ids = "/7/".to_string();
        assert_eq!(item.department(), Department::uncategorized());
        assert_eq!(item.department_id(), DepartmentId::Uncategorized);
    }

    #[test]
    fn test_deserialize_checkout_shape() {
        let json = r#"{
            "uniqueId": "sku-1",
            "name": "Apples",
            "availability": "available",
            "quantity": 3,
            "maxQuantity": 20,
            "productCategoryIds": "/1/10/",
            "productCategories": { "1": "Grocery", "10": "Fruit" }
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unique_id, ItemId::from("sku-1"));
        assert!(item.is_available());
        assert_eq!(item.max_quantity, 20);
        assert_eq!(item.department().name, "Grocery");
    }

    #[test]
    fn test_unknown_availability_is_unavailable() {
        let json = r#"{
            "uniqueId": "sku-2",
            "availability": "withoutStock",
            "quantity": 1
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.availability, Availability::Unavailable);
        assert_eq!(item.max_quantity, 99_999);
    }
}
