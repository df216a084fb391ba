//! # Apiview Evaluator
//!
//! Assembles the documentation panels of an API description into a virtual
//! DOM tree.
//!
//! ## Purpose
//!
//! The evaluator resolves the root `BaseLayout` component from a
//! [`ComponentRegistry`] and renders it against a [`Document`]. Every
//! component reads document fields through the selector layer and pulls its
//! collaborators out of the registry by name while rendering.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Evaluation is a pure function of Document + Registry state.**
//!
//! - The document is never mutated
//! - No I/O happens while rendering
//! - Attributes are stored in ordered maps, so output is byte-for-byte stable
//!
//! ## Failure Boundaries
//!
//! **Fatal**: a required component missing from the registry. The render pass
//! stops with [`EvalError::ComponentNotFound`]; registering the component
//! before the next pass is the only recovery.
//!
//! **Not errors**: absent document fields, unregistered optional components
//! and URLs rejected by the sanitizer. Each of those renders nothing in its
//! slot and the rest of the tree is unaffected.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apiview_document::Document;
//! use apiview_evaluator::{footer_plugin, ComponentRegistry, Evaluator};
//!
//! let doc = Document::from_json_str(source)?;
//!
//! let mut registry = ComponentRegistry::with_builtins();
//! registry.load_plugin(&footer_plugin());
//!
//! let evaluator = Evaluator::new(registry);
//! let vdom = evaluator.evaluate(&doc)?;
//! ```

use crate::props::Props;
use crate::registry::{names, ComponentRegistry};
use crate::sanitize::{SchemeSanitizer, UrlSanitizer};
use crate::vdom::VirtualDomDocument;
use apiview_document::{Document, DocumentSelectors};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Component '{name}' not found")]
    ComponentNotFound { name: String },
}

/// Renders documents against a component registry
pub struct Evaluator {
    registry: ComponentRegistry,
    sanitizer: Box<dyn UrlSanitizer>,
}

impl Evaluator {
    pub fn new(registry: ComponentRegistry) -> Self {
        Self::with_sanitizer(registry, SchemeSanitizer)
    }

    pub fn with_sanitizer(
        registry: ComponentRegistry,
        sanitizer: impl UrlSanitizer + 'static,
    ) -> Self {
        Self {
            registry,
            sanitizer: Box::new(sanitizer),
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Mutable access for re-registration between render passes
    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    #[instrument(skip(self, document), fields(components = self.registry.len()))]
    pub fn evaluate(&self, document: &Document) -> EvalResult<VirtualDomDocument> {
        info!("Starting document evaluation");

        let selectors = DocumentSelectors::new(document);
        let props = Props::new(&self.registry, &selectors, self.sanitizer.as_ref());

        let mut vdoc = VirtualDomDocument::new();
        match props.render(names::BASE_LAYOUT, true) {
            Ok(Some(root)) => vdoc.add_node(root),
            Ok(None) => debug!("Base layout rendered nothing"),
            Err(err) => {
                error!(error = %err, "Document evaluation failed");
                return Err(err);
            }
        }

        info!(nodes = vdoc.nodes.len(), "Document evaluation complete");
        Ok(vdoc)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ComponentRegistry::with_builtins())
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::component;
    use crate::vdom::VNode;

    #[test]
    fn test_missing_base_layout_is_fatal() {
        let evaluator = Evaluator::new(ComponentRegistry::new());
        let err = evaluator.evaluate(&Document::default()).unwrap_err();

        assert_eq!(
            err,
            EvalError::ComponentNotFound {
                name: names::BASE_LAYOUT.to_string()
            }
        );
    }

    #[test]
    fn test_empty_document_renders_bare_layout() {
        let evaluator = Evaluator::default();
        let vdoc = evaluator.evaluate(&Document::default()).unwrap();

        assert_eq!(vdoc.nodes, vec![VNode::element("div").with_class("apiview")]);
    }

    #[test]
    fn test_custom_sanitizer() {
        struct DenyAll;
        impl UrlSanitizer for DenyAll {
            fn sanitize(&self, _url: &str) -> Option<String> {
                None
            }
        }

        let mut registry = ComponentRegistry::with_builtins();
        registry.load_plugin(&crate::components::footer_plugin());
        let evaluator = Evaluator::with_sanitizer(registry, DenyAll);

        let doc = Document::from_json_str(
            r#"{"info": {"title": "T", "termsOfService": "http://x/tos"}}"#,
        )
        .unwrap();
        let vdoc = evaluator.evaluate(&doc).unwrap();
        assert!(crate::vdom_ext::collect_links(&vdoc.nodes).is_empty());
    }

    #[test]
    fn test_reregistration_between_passes() {
        let mut evaluator = Evaluator::default();
        let doc = Document::default();
        let before = evaluator.evaluate(&doc).unwrap();

        evaluator
            .registry_mut()
            .register(names::BASE_LAYOUT, component(|_| Ok(Some(VNode::text("custom")))));
        let after = evaluator.evaluate(&doc).unwrap();

        assert_ne!(before, after);
        assert_eq!(after.nodes, vec![VNode::text("custom")]);
    }
}
