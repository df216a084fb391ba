use super::{build_registry, config_dir};
use crate::config::Config;
use anyhow::Result;
use apiview_evaluator::ComponentRegistry;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Directory containing apiview.config.json (defaults to current directory)
    #[arg(long)]
    pub config: Option<String>,
}

pub fn components(args: ComponentsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(config_dir(&args.config, cwd))?;
    let registry = build_registry(&config);

    println!("{}", "Registered components".bright_blue().bold());
    for line in describe(&registry) {
        println!("{}", line);
    }
    println!();
    println!("{} components", registry.len());

    Ok(())
}

fn describe(registry: &ComponentRegistry) -> Vec<String> {
    registry
        .names()
        .into_iter()
        .map(|name| match registry.override_depth(name.as_str()) {
            Some(depth) if depth > 0 => format!("  {} (overridden ×{})", name, depth),
            _ => format!("  {}", name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiview_evaluator::names;

    #[test]
    fn test_describe_marks_overrides() {
        let registry = build_registry(&Config::default());
        let lines = describe(&registry);

        assert_eq!(lines.len(), registry.len());
        assert!(lines.contains(&format!("  {} (overridden ×1)", names::INFO)));
        assert!(lines.contains(&format!("  {}", names::FOOTER)));
    }

    #[test]
    fn test_describe_is_sorted() {
        let lines = describe(&build_registry(&Config::default()));
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
    }
}
