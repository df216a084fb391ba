use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Page title written to the config
    #[arg(short, long)]
    pub title: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        title: args.title,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: apiview render openapi.json -o index.html");
    println!("  2. Run: apiview components to list overridable components");

    Ok(())
}
