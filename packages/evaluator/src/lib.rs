pub mod builtins;
pub mod components;
pub mod evaluator;
pub mod markdown;
pub mod plugin;
pub mod props;
pub mod registry;
pub mod sanitize;
pub mod vdom;
pub mod vdom_ext;
pub mod visitor;

pub use builtins::core_plugin;
pub use components::footer_plugin;
pub use evaluator::{EvalError, EvalResult, Evaluator};
pub use markdown::render_markdown;
pub use plugin::{Binding, PluginDescriptor, Wrapper};
pub use props::Props;
pub use registry::{component, names, Component, ComponentName, ComponentRegistry};
pub use sanitize::{SchemeSanitizer, UrlSanitizer};
pub use vdom::{VNode, VirtualDomDocument};
pub use visitor::Visitor;

// Re-export helpers for ergonomic querying
pub use vdom_ext::{
    as_element, collect_links, find_all_by_tag, find_by_class, text_content, ElementRef, LinkRef,
};
