//! Cartlist - Elm-style shopping-cart product list
//!
//! This crate provides the core types and logic behind a storefront's
//! product list: a quantity editing state machine per line item and the
//! availability/department grouping the list is rendered from.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grouping;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ProductListConfig;
pub use grouping::{group_products, DepartmentGroup, GroupedResult, Partition, ProductLayout};
pub use messages::{ListMsg, Msg, QuantityMsg, StepDirection};
pub use model::{LineItem, ProductListModel, QuantityEditor};
