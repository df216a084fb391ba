use super::{build_registry, config_dir};
use crate::config::Config;
use anyhow::{Context, Result};
use apiview_compiler_html::{compile_fragment, compile_to_html};
use apiview_document::{Document, DocumentSelectors, SpecSelectors};
use apiview_evaluator::Evaluator;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// API description (JSON)
    pub document: String,

    /// Write HTML to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit only the rendered markup, without the page shell
    #[arg(long)]
    pub fragment: bool,

    /// Directory containing apiview.config.json (defaults to current directory)
    #[arg(long)]
    pub config: Option<String>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let html = render_to_string(&args, cwd)?;

    match &args.output {
        Some(output) => {
            let output_file = PathBuf::from(cwd).join(output);
            if let Some(parent) = output_file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_file, html)?;
            println!(
                "  {} {} → {}",
                "✓".green(),
                args.document,
                output_file.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn render_to_string(args: &RenderArgs, cwd: &str) -> Result<String> {
    let config = Config::load(config_dir(&args.config, cwd))?;

    let document_path = PathBuf::from(cwd).join(&args.document);
    let document = Document::from_path(&document_path)
        .with_context(|| format!("Failed to read {}", document_path.display()))?;

    let evaluator = Evaluator::new(build_registry(&config));
    let vdom = evaluator.evaluate(&document)?;

    let selectors = DocumentSelectors::new(&document);
    let options = config.compile_options(selectors.title());

    let html = if args.fragment {
        compile_fragment(&vdom, options)?
    } else {
        compile_to_html(&vdom, options)?
    };
    Ok(html)
}
