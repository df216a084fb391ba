mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{components, init, render, ComponentsArgs, InitArgs, RenderArgs};
use tracing_subscriber::EnvFilter;

/// apiview - render API descriptions into documentation pages
#[derive(Parser, Debug)]
#[command(name = "apiview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default apiview.config.json
    Init(InitArgs),

    /// Render an API description to HTML
    Render(RenderArgs),

    /// List registered components and how often they were overridden
    Components(ComponentsArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Components(args) => components(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
