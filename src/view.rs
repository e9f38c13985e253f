//! Plain-text rendering of the product list
//!
//! A minimal rendering surface used by the command-line binary.

use std::fmt::Write;

use crate::grouping::{DepartmentGroup, ProductLayout};
use crate::model::{Availability, LineItem, ProductListModel, QuantityWidget};

const INDENT: &str = "  ";

/// Render the whole list as text
pub fn render_text(model: &ProductListModel) -> String {
    let layout = model.layout();
    let mut out = String::new();

    if layout.show_unavailable_header() {
        let _ = writeln!(out, "{} unavailable items", layout.unavailable_count());
    }
    match &layout {
        ProductLayout::Flat(p) => render_items(&mut out, model, &p.unavailable_items, 1),
        ProductLayout::Grouped(g) => {
            render_groups(&mut out, model, Availability::Unavailable, &g.unavailable_groups)
        }
    }

    if layout.show_available_header() {
        let _ = writeln!(out, "{} available items", layout.available_count());
    }
    match &layout {
        ProductLayout::Flat(p) => render_items(&mut out, model, &p.available_items, 1),
        ProductLayout::Grouped(g) => {
            render_groups(&mut out, model, Availability::Available, &g.available_groups)
        }
    }

    out
}

fn render_groups(
    out: &mut String,
    model: &ProductListModel,
    section: Availability,
    groups: &[DepartmentGroup<'_>],
) {
    for group in groups {
        if model.is_collapsed(section, &group.department_id) {
            let _ = writeln!(
                out,
                "{}[+] {} ({} items)",
                INDENT,
                group.department_name,
                group.items.len()
            );
            continue;
        }
        let _ = writeln!(out, "{}[-] {}", INDENT, group.department_name);
        render_items(out, model, &group.items, 2);
    }
}

fn render_items(out: &mut String, model: &ProductListModel, items: &[&LineItem], depth: usize) {
    let indent = INDENT.repeat(depth);
    for item in items {
        let name = if item.name.is_empty() {
            item.unique_id.as_str()
        } else {
            item.name.as_str()
        };
        let quantity = model
            .editor(&item.unique_id)
            .map(|e| describe_widget(&e.widget()))
            .unwrap_or_default();
        let _ = writeln!(out, "{}{} [{}] {}", indent, name, item.unique_id, quantity);
    }
}

fn describe_widget(widget: &QuantityWidget) -> String {
    match widget {
        QuantityWidget::Dropdown {
            options,
            selected,
            disabled,
        } => {
            let labels: Vec<String> = options.iter().map(|o| o.label.to_string()).collect();
            format!(
                "qty {} <{}>{}",
                selected,
                labels.join("|"),
                if *disabled { " (disabled)" } else { "" }
            )
        }
        QuantityWidget::Input {
            text,
            step_buttons,
            disabled,
            ..
        } => {
            let field = if *step_buttons {
                format!("[-] {} [+]", text)
            } else {
                format!("[{}]", text)
            };
            format!(
                "qty {}{}",
                field,
                if *disabled { " (disabled)" } else { "" }
            )
        }
    }
}
