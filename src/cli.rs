//! Command-line argument parsing
//!
//! Supports:
//! - Rendering a cart snapshot (JSON list of line items)
//! - Overriding the persisted list options
//! - Replaying a JSON script of messages against the list

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ProductListConfig;
use crate::model::{ListOptions, SelectorMode};

/// Quantity selector as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectorArg {
    Dropdown,
    Input,
}

impl From<SelectorArg> for SelectorMode {
    fn from(arg: SelectorArg) -> Self {
        match arg {
            SelectorArg::Dropdown => SelectorMode::Dropdown,
            SelectorArg::Input => SelectorMode::Input,
        }
    }
}

/// Render a shopping-cart product list
#[derive(Parser, Debug)]
#[command(name = "cartlist", version, about = "Render a shopping-cart product list")]
pub struct CliArgs {
    /// JSON file with the cart's line items
    #[arg(value_name = "ITEMS")]
    pub items: PathBuf,

    /// Group each availability section by department
    #[arg(short = 'g', long)]
    pub group_by_department: bool,

    /// Show +/- buttons beside the quantity field
    #[arg(short = 'b', long)]
    pub quantity_buttons: bool,

    /// Preferred quantity selector for small quantities
    #[arg(long, value_enum)]
    pub selector: Option<SelectorArg>,

    /// JSON file with messages to replay before rendering
    #[arg(short = 'e', long, value_name = "EVENTS")]
    pub events: Option<PathBuf>,

    /// Print the layout as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub items_path: PathBuf,
    pub events_path: Option<PathBuf>,
    pub options: ListOptions,
    pub json: bool,
}

impl CliArgs {
    /// Merge the flags over the persisted configuration. Flags only ever
    /// switch features on; the config file decides otherwise.
    pub fn into_config(self, persisted: &ProductListConfig) -> RunConfig {
        let mut options = ListOptions::from(persisted);
        options.group_by_department |= self.group_by_department;
        options.quantity_buttons |= self.quantity_buttons;
        if let Some(selector) = self.selector {
            options.selector = selector.into();
        }

        RunConfig {
            items_path: self.items,
            events_path: self.events,
            options,
            json: self.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from(["cartlist", "cart.json", "-g", "--selector", "input"]);
        let config = args.into_config(&ProductListConfig::default());
        assert!(config.options.group_by_department);
        assert!(!config.options.quantity_buttons);
        assert_eq!(config.options.selector, SelectorMode::Input);
        assert_eq!(config.items_path, PathBuf::from("cart.json"));
        assert!(config.events_path.is_none());
    }

    #[test]
    fn test_config_kept_without_flags() {
        let persisted = ProductListConfig {
            quantity_buttons: true,
            decrement_floor: 1,
            ..ProductListConfig::default()
        };
        let args = CliArgs::parse_from(["cartlist", "cart.json", "--events", "ev.json"]);
        let config = args.into_config(&persisted);
        assert!(config.options.quantity_buttons);
        assert_eq!(config.options.decrement_floor, 1);
        assert_eq!(config.events_path, Some(PathBuf::from("ev.json")));
    }
}
