use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let row = |key: &str, value: Option<String>, default: &str| match value {
        Some(v) => println!("  {:<22} {}", key, v.green()),
        None => println!("  {:<22} {}", key, format!("{default} (default)").dimmed()),
    };
    row("defaults.theme", config.theme().map(str::to_string), "light");
    row(
        "defaults.start_slide",
        config.start_slide().map(|n| n.to_string()),
        "1",
    );
    row(
        "defaults.fullscreen",
        config
            .defaults
            .as_ref()
            .and_then(|d| d.fullscreen)
            .map(|b| b.to_string()),
        "false",
    );
    row(
        "defaults.content",
        config.content().map(|p| p.display().to_string()),
        "built-in",
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::info!(key, value, "Config updated");
    println!("{} {} = {}", "Set".green().bold(), key, value);
    println!("{}", format!("Saved to {}", path.display()).dimmed());
    Ok(())
}
