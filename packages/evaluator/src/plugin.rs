//! Plugin descriptors
//!
//! A plugin is a static bundle of bindings merged into a
//! [`ComponentRegistry`] at startup. Bindings are applied in declaration
//! order; loading the same descriptor twice re-applies every binding.

use crate::registry::{Component, ComponentName, ComponentRegistry};
use std::sync::Arc;
use tracing::info;

/// Builds a new component from the one it replaces
pub type Wrapper = Arc<dyn Fn(Option<Component>) -> Component + Send + Sync>;

/// How a plugin binds a name
#[derive(Clone)]
pub enum Binding {
    /// Replace whatever is bound
    Replace(Component),
    /// Decorate the current binding
    Wrap(Wrapper),
}

#[derive(Clone)]
pub struct PluginDescriptor {
    pub name: String,
    pub bindings: Vec<(ComponentName, Binding)>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn component(mut self, name: impl Into<ComponentName>, component: Component) -> Self {
        self.bindings.push((name.into(), Binding::Replace(component)));
        self
    }

    pub fn wrap<F>(mut self, name: impl Into<ComponentName>, wrapper: F) -> Self
    where
        F: Fn(Option<Component>) -> Component + Send + Sync + 'static,
    {
        self.bindings.push((name.into(), Binding::Wrap(Arc::new(wrapper))));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &ComponentName> {
        self.bindings.iter().map(|(name, _)| name)
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("bindings", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistry {
    /// Merge every binding of `plugin` into the registry
    pub fn load_plugin(&mut self, plugin: &PluginDescriptor) {
        info!(plugin = %plugin.name, bindings = plugin.bindings.len(), "Loading plugin");

        for (name, binding) in &plugin.bindings {
            match binding {
                Binding::Replace(component) => self.register(name.clone(), Arc::clone(component)),
                Binding::Wrap(wrapper) => {
                    let wrapper = Arc::clone(wrapper);
                    self.register_override(name.clone(), move |previous| wrapper(previous));
                }
            }
        }
    }
}
