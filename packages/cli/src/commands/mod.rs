pub mod components;
pub mod init;
pub mod render;

pub use components::{components, ComponentsArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};

use crate::config::Config;
use apiview_evaluator::{footer_plugin, ComponentRegistry};

/// Stock components, the footer plugin, then the configured overrides
pub(crate) fn build_registry(config: &Config) -> ComponentRegistry {
    let mut registry = ComponentRegistry::with_builtins();
    registry.load_plugin(&footer_plugin());
    config.apply(&mut registry);
    registry
}

/// Directory the config is read from: `--config` when given, else `cwd`
pub(crate) fn config_dir<'a>(config: &'a Option<String>, cwd: &'a str) -> &'a str {
    config.as_deref().unwrap_or(cwd)
}
