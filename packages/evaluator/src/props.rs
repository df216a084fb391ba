use crate::evaluator::EvalResult;
use crate::registry::{Component, ComponentRegistry};
use crate::sanitize::UrlSanitizer;
use crate::vdom::VNode;
use apiview_document::SpecSelectors;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything a component receives when it renders
///
/// Carries the lookup into the registry, the selector layer, the URL
/// sanitizer and the string arguments passed by the parent component.
#[derive(Clone)]
pub struct Props<'a> {
    registry: &'a ComponentRegistry,
    selectors: &'a dyn SpecSelectors,
    sanitizer: &'a dyn UrlSanitizer,
    args: BTreeMap<String, String>,
}

impl<'a> Props<'a> {
    pub fn new(
        registry: &'a ComponentRegistry,
        selectors: &'a dyn SpecSelectors,
        sanitizer: &'a dyn UrlSanitizer,
    ) -> Self {
        Self {
            registry,
            selectors,
            sanitizer,
            args: BTreeMap::new(),
        }
    }

    /// Resolve a collaborator by name at render time
    pub fn get_component(&self, name: &str, required: bool) -> EvalResult<Option<Component>> {
        self.registry.resolve(name, required)
    }

    pub fn spec_selectors(&self) -> &'a dyn SpecSelectors {
        self.selectors
    }

    pub fn sanitizer(&self) -> &'a dyn UrlSanitizer {
        self.sanitizer
    }

    /// Sanitized form of `url`, or `None` when it must not be linked
    pub fn sanitize_url(&self, url: &str) -> Option<String> {
        let sanitized = self.sanitizer.sanitize(url);
        if sanitized.is_none() {
            debug!(url = %url, "Rejected unsafe URL");
        }
        sanitized
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Child props sharing the same registry and collaborators, without arguments
    pub fn child(&self) -> Props<'a> {
        Props::new(self.registry, self.selectors, self.sanitizer)
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Resolve `name` and render it with fresh child props
    pub fn render(&self, name: &str, required: bool) -> EvalResult<Option<VNode>> {
        self.render_with(name, required, self.child())
    }

    /// Resolve `name` and render it with `props`
    ///
    /// An optional component that is not registered renders nothing.
    pub fn render_with(
        &self,
        name: &str,
        required: bool,
        props: Props<'a>,
    ) -> EvalResult<Option<VNode>> {
        match self.get_component(name, required)? {
            Some(component) => component(&props),
            None => Ok(None),
        }
    }
}
