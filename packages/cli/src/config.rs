use apiview_compiler_html::CompileOptions;
use apiview_evaluator::{component, ComponentRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_NAME: &str = "apiview.config.json";

/// apiview configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Page title; falls back to the document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Pretty print HTML output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Indentation used when pretty printing
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Components replaced with one that renders nothing
    #[serde(default)]
    pub disabled_components: Vec<String>,

    /// Extra class added to a component's root element
    #[serde(default)]
    pub extra_classes: BTreeMap<String, String>,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// HTML options, titled with `fallback_title` unless the config sets one
    pub fn compile_options(&self, fallback_title: Option<&str>) -> CompileOptions {
        let defaults = CompileOptions::default();
        CompileOptions {
            pretty: self.pretty,
            indent: self.indent.clone(),
            title: self
                .title
                .clone()
                .or_else(|| fallback_title.map(str::to_string))
                .unwrap_or(defaults.title),
        }
    }

    /// Layer the configured overrides on top of `registry`
    ///
    /// Disabling runs first, so a class configured for a disabled component
    /// decorates nothing.
    pub fn apply(&self, registry: &mut ComponentRegistry) {
        for name in &self.disabled_components {
            debug!(component = %name, "Disabling component");
            registry.register(name.as_str(), component(|_| Ok(None)));
        }

        for name in self.unmatched_extra_classes(registry) {
            warn!(component = %name, "extraClasses names an unregistered component");
        }

        for (name, class) in &self.extra_classes {
            let class = class.clone();
            registry.register_override(name.as_str(), move |previous| {
                component(move |props| match &previous {
                    Some(previous) => Ok(previous(props)?.map(|node| node.with_class(&class))),
                    None => Ok(None),
                })
            });
        }
    }

    /// `extraClasses` keys with no binding in `registry`
    pub fn unmatched_extra_classes<'a>(&'a self, registry: &ComponentRegistry) -> Vec<&'a str> {
        self.extra_classes
            .keys()
            .map(String::as_str)
            .filter(|name| !registry.contains(name))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            pretty: default_pretty(),
            indent: default_indent(),
            disabled_components: vec![],
            extra_classes: BTreeMap::new(),
        }
    }
}
