use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use cartlist::cli::CliArgs;
use cartlist::config::ProductListConfig;
use cartlist::messages::Msg;
use cartlist::model::{LineItem, ProductListModel};
use cartlist::update::update;
use cartlist::view::render_text;

fn load_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} in {}", what, path.display()))
}

fn main() -> Result<()> {
    cartlist::tracing::init();

    let args = CliArgs::parse();
    let persisted = ProductListConfig::load();
    let config = args.into_config(&persisted);

    let items: Vec<LineItem> = load_json(&config.items_path, "line items")?;
    let mut model = ProductListModel::new(items, config.options);

    if let Some(events_path) = &config.events_path {
        let events: Vec<Msg> = load_json(events_path, "events")?;
        for msg in events {
            if let Some(cmd) = update(&mut model, msg) {
                println!("{}", serde_json::to_string(&cmd)?);
            }
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&model.layout())?);
    } else {
        print!("{}", render_text(&model));
    }

    Ok(())
}
