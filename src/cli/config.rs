use anyhow::{anyhow, Result};
use reply_assistant::config::AssistantConfig;
use reply_assistant::storage::path_utils;

/// `config show` — effective configuration, API key masked.
pub fn run_show() -> Result<()> {
    let mut config = AssistantConfig::load();
    if config.model.has_api_key() {
        config.model.api_key = mask(&config.model.api_key);
    }
    println!("# {}", path_utils::config_path().display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// `config init` — write defaults to `config.json`.
pub fn run_init(force: bool) -> Result<()> {
    let path = path_utils::config_path();
    if path.exists() && !force {
        println!("Config already exists: {} (use --force to overwrite)", path.display());
        return Ok(());
    }
    AssistantConfig::default()
        .save_to(&path)
        .map_err(|e| anyhow!(e))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}****", visible)
}
