//! Availability partitioning and department grouping
//!
//! Turns a flat item list into the structure the list is rendered from.
//! Availability is always split first; department grouping is optional.
//! Order is always first-occurrence order of the input, never sorted.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Availability, DepartmentId, LineItem};

/// Items of one department within one availability section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentGroup<'a> {
    pub department_id: DepartmentId,
    pub department_name: String,
    pub items: Vec<&'a LineItem>,
}

/// Items split by availability, input order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition<'a> {
    pub unavailable_items: Vec<&'a LineItem>,
    pub available_items: Vec<&'a LineItem>,
}

impl<'a> Partition<'a> {
    /// Stable single-pass split
    pub fn new(items: &'a [LineItem]) -> Self {
        let (available_items, unavailable_items): (Vec<_>, Vec<_>) =
            items.iter().partition(|i| i.is_available());
        Self {
            unavailable_items,
            available_items,
        }
    }
}

/// Both sections grouped by department
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedResult<'a> {
    pub unavailable_groups: Vec<DepartmentGroup<'a>>,
    pub available_groups: Vec<DepartmentGroup<'a>>,
    pub unavailable_count: usize,
    pub available_count: usize,
}

impl<'a> GroupedResult<'a> {
    pub fn groups(&self, section: Availability) -> &[DepartmentGroup<'a>] {
        match section {
            Availability::Available => &self.available_groups,
            Availability::Unavailable => &self.unavailable_groups,
        }
    }
}

/// Renderable structure of the product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "layout")]
pub enum ProductLayout<'a> {
    Flat(Partition<'a>),
    Grouped(GroupedResult<'a>),
}

impl ProductLayout<'_> {
    pub fn unavailable_count(&self) -> usize {
        match self {
            ProductLayout::Flat(p) => p.unavailable_items.len(),
            ProductLayout::Grouped(g) => g.unavailable_count,
        }
    }

    pub fn available_count(&self) -> usize {
        match self {
            ProductLayout::Flat(p) => p.available_items.len(),
            ProductLayout::Grouped(g) => g.available_count,
        }
    }

    /// The "N unavailable items" header is shown whenever there are any
    pub fn show_unavailable_header(&self) -> bool {
        self.unavailable_count() > 0
    }

    /// The "N available items" header only separates two non-empty sections
    pub fn show_available_header(&self) -> bool {
        self.unavailable_count() > 0 && self.available_count() > 0
    }
}

/// Group items by department in first-occurrence order
pub fn group_by_department<'a>(items: &[&'a LineItem]) -> Vec<DepartmentGroup<'a>> {
    let mut index: HashMap<DepartmentId, usize> = HashMap::new();
    let mut groups: Vec<DepartmentGroup<'a>> = Vec::new();

    for &item in items {
        let department = item.department();
        let slot = *index.entry(department.id.clone()).or_insert_with(|| {
            groups.push(DepartmentGroup {
                department_id: department.id,
                department_name: department.name,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}

/// Build the renderable layout for `items`
pub fn group_products(items: &[LineItem], by_department: bool) -> ProductLayout<'_> {
    let partition = Partition::new(items);
    if !by_department {
        return ProductLayout::Flat(partition);
    }

    let grouped = GroupedResult {
        unavailable_groups: group_by_department(&partition.unavailable_items),
        available_groups: group_by_department(&partition.available_items),
        unavailable_count: partition.unavailable_items.len(),
        available_count: partition.available_items.len(),
    };
    tracing::trace!(
        unavailable_groups = grouped.unavailable_groups.len(),
        available_groups = grouped.available_groups.len(),
        "grouped products by department"
    );
    ProductLayout::Grouped(grouped)
}
