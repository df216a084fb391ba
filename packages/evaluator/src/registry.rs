//! # Component Registry
//!
//! Maps a [`ComponentName`] to a [`Component`]. Bindings can be replaced or
//! wrapped but never removed; the registry lives as long as the session that
//! owns it.
//!
//! Components never hold on to their collaborators. They look them up
//! through [`Props::get_component`] while rendering, so a re-registration is
//! visible to every later render pass, including renders of components that
//! were registered before it. A [`Component`] handle returned by
//! [`ComponentRegistry::resolve`] is a snapshot and keeps pointing at the
//! implementation that was bound when it was resolved.

use crate::evaluator::{EvalError, EvalResult};
use crate::props::Props;
use crate::vdom::VNode;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A renderable component. `Ok(None)` renders nothing.
pub type Component = Arc<dyn Fn(&Props<'_>) -> EvalResult<Option<VNode>> + Send + Sync>;

/// Wrap a closure as a [`Component`]
pub fn component<F>(render: F) -> Component
where
    F: Fn(&Props<'_>) -> EvalResult<Option<VNode>> + Send + Sync + 'static,
{
    Arc::new(render)
}

/// Well-known component names
pub mod names {
    pub const BASE_LAYOUT: &str = "BaseLayout";
    pub const INFO_CONTAINER: &str = "InfoContainer";
    pub const INFO: &str = "info";
    pub const OAS31_INFO: &str = "OAS31Info";
    pub const LINK: &str = "Link";
    pub const MARKDOWN: &str = "Markdown";
    pub const VERSION_STAMP: &str = "VersionStamp";
    pub const OPENAPI_VERSION: &str = "OpenAPIVersion";
    pub const JSON_SCHEMA_DIALECT: &str = "JsonSchemaDialect";
    pub const CONTACT: &str = "Contact";
    pub const LICENSE: &str = "License";
    pub const FOOTER_CONTAINER: &str = "FooterContainer";
    pub const FOOTER: &str = "Footer";
    pub const FOOTER_CONTACT_EMAIL: &str = "FooterContactEmail";
    pub const FOOTER_CONTACT_URL: &str = "FooterContactUrl";
    pub const FOOTER_LICENSE: &str = "FooterLicense";
}

/// Registry key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ComponentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ComponentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

struct Binding {
    component: Component,
    /// Number of times the binding was replaced or wrapped
    overrides: usize,
}

/// Name-keyed component registry
#[derive(Default)]
pub struct ComponentRegistry {
    bindings: HashMap<ComponentName, Binding>,
}

impl ComponentRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the host's stock components
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.load_plugin(&crate::builtins::core_plugin());
        registry
    }

    /// Store or replace the binding for `name`
    pub fn register(&mut self, name: impl Into<ComponentName>, component: Component) {
        self.bind(name.into(), component);
    }

    /// Replace the binding for `name` with `factory(previous)`
    ///
    /// The factory receives the current implementation so the new one can
    /// delegate to it. Overriding an unset name behaves like [`register`].
    ///
    /// [`register`]: ComponentRegistry::register
    pub fn register_override<F>(&mut self, name: impl Into<ComponentName>, factory: F)
    where
        F: FnOnce(Option<Component>) -> Component,
    {
        let name = name.into();
        let previous = self.bindings.get(&name).map(|b| Arc::clone(&b.component));
        let component = factory(previous);
        self.bind(name, component);
    }

    fn bind(&mut self, name: ComponentName, component: Component) {
        match self.bindings.get_mut(&name) {
            Some(binding) => {
                binding.component = component;
                binding.overrides += 1;
                debug!(component = %name, overrides = binding.overrides, "Overriding component");
            }
            None => {
                debug!(component = %name, "Registering component");
                self.bindings.insert(
                    name,
                    Binding {
                        component,
                        overrides: 0,
                    },
                );
            }
        }
    }

    /// Look up the implementation bound to `name`
    ///
    /// A missing binding fails with [`EvalError::ComponentNotFound`] when
    /// `required` is set and yields `Ok(None)` otherwise.
    pub fn resolve(&self, name: &str, required: bool) -> EvalResult<Option<Component>> {
        match self.bindings.get(name) {
            Some(binding) => Ok(Some(Arc::clone(&binding.component))),
            None if required => Err(EvalError::ComponentNotFound {
                name: name.to_string(),
            }),
            None => {
                debug!(component = %name, "Optional component not registered");
                Ok(None)
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// How many times `name` has been replaced or wrapped since first registration
    pub fn override_depth(&self, name: &str) -> Option<usize> {
        self.bindings.get(name).map(|b| b.overrides)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&ComponentName> {
        let mut names: Vec<_> = self.bindings.keys().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::SchemeSanitizer;
    use apiview_document::{Document, DocumentSelectors};

    fn text(content: &'static str) -> Component {
        component(move |_props| Ok(Some(VNode::text(content))))
    }

    fn render(registry: &ComponentRegistry, target: &Component) -> Option<VNode> {
        let document = Document::default();
        let selectors = DocumentSelectors::new(&document);
        let sanitizer = SchemeSanitizer;
        let props = Props::new(registry, &selectors, &sanitizer);
        target(&props).unwrap()
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ComponentRegistry::new();
        registry.register("Greeting", text("hello"));

        let component = registry.resolve("Greeting", true).unwrap().unwrap();
        assert_eq!(render(&registry, &component), Some(VNode::text("hello")));
        assert_eq!(registry.override_depth("Greeting"), Some(0));
    }

    #[test]
    fn test_required_lookup_fails_for_unknown_name() {
        let registry = ComponentRegistry::new();
        let err = registry.resolve("FooterContactEmail", true).err().unwrap();

        assert!(matches!(
            err,
            EvalError::ComponentNotFound { ref name } if name == "FooterContactEmail"
        ));
        assert!(err.to_string().contains("FooterContactEmail"));
    }

    #[test]
    fn test_optional_lookup_returns_none() {
        let registry = ComponentRegistry::new();
        assert!(registry.resolve("FooterContactEmail", false).unwrap().is_none());
    }

    #[test]
    fn test_register_replaces_binding() {
        let mut registry = ComponentRegistry::new();
        registry.register("Greeting", text("hello"));
        registry.register("Greeting", text("bonjour"));

        let component = registry.resolve("Greeting", true).unwrap().unwrap();
        assert_eq!(render(&registry, &component), Some(VNode::text("bonjour")));
        assert_eq!(registry.override_depth("Greeting"), Some(1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_override_wraps_previous() {
        let mut registry = ComponentRegistry::new();
        registry.register("Greeting", text("hello"));
        registry.register_override("Greeting", |previous| {
            let previous = previous.unwrap();
            component(move |props| {
                let inner = previous(props)?;
                Ok(Some(VNode::element("strong").with_optional_child(inner)))
            })
        });

        let component = registry.resolve("Greeting", true).unwrap().unwrap();
        assert_eq!(
            render(&registry, &component),
            Some(VNode::element("strong").with_child(VNode::text("hello")))
        );
    }

    #[test]
    fn test_override_of_unset_name_registers() {
        let mut registry = ComponentRegistry::new();
        registry.register_override("Greeting", |previous| {
            assert!(previous.is_none());
            text("fresh")
        });

        assert!(registry.contains("Greeting"));
        assert_eq!(registry.override_depth("Greeting"), Some(0));
    }

    #[test]
    fn test_resolved_handle_is_a_snapshot() {
        let mut registry = ComponentRegistry::new();
        registry.register("Greeting", text("hello"));
        let before = registry.resolve("Greeting", true).unwrap().unwrap();

        registry.register("Greeting", text("bonjour"));
        let after = registry.resolve("Greeting", true).unwrap().unwrap();

        assert_eq!(render(&registry, &before), Some(VNode::text("hello")));
        assert_eq!(render(&registry, &after), Some(VNode::text("bonjour")));
    }

    #[test]
    fn test_late_binding_through_props() {
        let mut registry = ComponentRegistry::new();
        registry.register(
            "Outer",
            component(|props| {
                let inner = props.render("Inner", true)?;
                Ok(Some(VNode::element("div").with_optional_child(inner)))
            }),
        );
        registry.register("Inner", text("v1"));
        let outer = registry.resolve("Outer", true).unwrap().unwrap();
        assert_eq!(
            render(&registry, &outer),
            Some(VNode::element("div").with_child(VNode::text("v1")))
        );

        registry.register("Inner", text("v2"));
        assert_eq!(
            render(&registry, &outer),
            Some(VNode::element("div").with_child(VNode::text("v2")))
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = ComponentRegistry::new();
        registry.register("b", text("b"));
        registry.register("a", text("a"));

        let names: Vec<&str> = registry.names().into_iter().map(ComponentName::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
