//! Stock host components
//!
//! The components every viewer ships with, bundled as the `core` plugin.
//! Plugins loaded afterwards shadow or wrap them by name.

use crate::evaluator::EvalResult;
use crate::markdown::render_markdown;
use crate::plugin::PluginDescriptor;
use crate::props::Props;
use crate::registry::{component, names};
use crate::vdom::VNode;

pub fn core_plugin() -> PluginDescriptor {
    PluginDescriptor::new("core")
        .component(names::BASE_LAYOUT, component(base_layout))
        .component(names::INFO_CONTAINER, component(info_container))
        .component(names::INFO, component(|props| stock_info(props, false)))
        .component(names::OAS31_INFO, component(|props| stock_info(props, true)))
        .component(names::LINK, component(link))
        .component(names::MARKDOWN, component(markdown))
        .component(names::VERSION_STAMP, component(version_stamp))
        .component(names::OPENAPI_VERSION, component(openapi_version))
        .component(names::JSON_SCHEMA_DIALECT, component(json_schema_dialect))
        .component(names::CONTACT, component(contact))
        .component(names::LICENSE, component(license))
}

/// Render the registered `Link` for `href`
pub(crate) fn link_to(props: &Props<'_>, href: &str, label: &str) -> EvalResult<Option<VNode>> {
    let link_props = props.child().with_arg("href", href).with_arg("label", label);
    props.render_with(names::LINK, true, link_props)
}

/// Render the registered `Markdown` (optional) for `source`
pub(crate) fn markdown_of(props: &Props<'_>, source: Option<&str>) -> EvalResult<Option<VNode>> {
    match source {
        Some(source) => {
            let markdown_props = props.child().with_arg("source", source);
            props.render_with(names::MARKDOWN, false, markdown_props)
        }
        None => Ok(None),
    }
}

fn base_layout(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let info = props.render(names::INFO_CONTAINER, true)?;
    let footer = props.render(names::FOOTER_CONTAINER, false)?;

    Ok(Some(
        VNode::element("div")
            .with_class("apiview")
            .with_optional_child(info)
            .with_optional_child(footer),
    ))
}

fn info_container(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    if selectors.info().is_none() {
        return Ok(None);
    }

    let panel = if selectors.is_oas31() {
        props.render(names::OAS31_INFO, true)?
    } else {
        props.render(names::INFO, true)?
    };

    Ok(panel.map(|panel| {
        VNode::element("div")
            .with_class("information-container")
            .with_child(panel)
    }))
}

/// Title heading, optional summary and description shared by every info panel
pub(crate) fn info_panel_base(props: &Props<'_>, with_summary: bool) -> EvalResult<VNode> {
    let selectors = props.spec_selectors();

    let mut title = VNode::element("h2").with_class("title");
    if let Some(text) = selectors.title() {
        title = title.with_child(VNode::text(text));
    }
    if let Some(version) = selectors.version() {
        let stamp_props = props.child().with_arg("version", version);
        let stamp = props.render_with(names::VERSION_STAMP, true, stamp_props)?;
        title = title.with_optional_child(stamp);
    }
    title = title.with_optional_child(props.render(names::OPENAPI_VERSION, true)?);

    let mut panel = VNode::element("div")
        .with_class("info")
        .with_child(VNode::element("hgroup").with_class("main").with_child(title));

    if with_summary {
        if let Some(summary) = selectors.summary() {
            panel = panel.with_child(
                VNode::element("p")
                    .with_class("info__summary")
                    .with_child(VNode::text(summary)),
            );
        }
    }

    Ok(panel.with_child(
        VNode::element("div")
            .with_class("description")
            .with_optional_child(markdown_of(props, selectors.description())?),
    ))
}

fn stock_info(props: &Props<'_>, oas31: bool) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let mut panel = info_panel_base(props, oas31)?;

    if let Some(tos) = selectors.terms_of_service_url() {
        if let Some(link) = link_to(props, tos, "Terms of service")? {
            let tos = VNode::element("div").with_class("info__tos").with_child(link);
            panel = panel.with_child(tos);
        }
    }

    if selectors.contact().is_some() {
        panel = panel.with_optional_child(props.render(names::CONTACT, true)?);
    }
    if selectors.license().is_some() {
        panel = panel.with_optional_child(props.render(names::LICENSE, true)?);
    }
    if oas31 {
        panel = panel.with_optional_child(props.render(names::JSON_SCHEMA_DIALECT, true)?);
    }

    Ok(Some(panel))
}

fn link(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let Some(href) = props.arg("href").and_then(|href| props.sanitize_url(href)) else {
        return Ok(None);
    };
    let label = props.arg("label").unwrap_or(href.as_str()).to_string();

    let mut anchor = VNode::element("a")
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer");
    if let Some(class) = props.arg("class") {
        anchor = anchor.with_class(class);
    }

    Ok(Some(
        anchor
            .with_attr("href", href)
            .with_child(VNode::text(label)),
    ))
}

fn markdown(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let Some(source) = props.arg("source").filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    Ok(Some(
        VNode::element("div")
            .with_class("markdown")
            .with_children(render_markdown(source, props.sanitizer())),
    ))
}

fn version_stamp(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    Ok(props.arg("version").map(|version| {
        VNode::element("small").with_child(
            VNode::element("pre")
                .with_class("version")
                .with_child(VNode::text(version)),
        )
    }))
}

fn openapi_version(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let label = match props.spec_selectors().spec_version() {
        Some(version) => {
            let short: Vec<&str> = version.split('.').take(2).collect();
            format!("OAS {}", short.join("."))
        }
        None => "OAS".to_string(),
    };

    Ok(Some(
        VNode::element("small").with_class("version-stamp").with_child(
            VNode::element("pre")
                .with_class("version")
                .with_child(VNode::text(label)),
        ),
    ))
}

fn json_schema_dialect(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    if !selectors.is_oas31() {
        return Ok(None);
    }
    let Some(dialect) = selectors
        .json_schema_dialect()
        .or_else(|| selectors.json_schema_dialect_default())
    else {
        return Ok(None);
    };

    Ok(link_to(props, dialect, dialect)?.map(|link| {
        VNode::element("div")
            .with_class("info__jsonschemadialect")
            .with_child(VNode::text("JSON Schema dialect: "))
            .with_child(link)
    }))
}

fn contact(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let name = selectors.contact_name().unwrap_or("the developer");

    let mut block = VNode::element("div").with_class("info__contact");
    if let Some(url) = selectors.contact_url() {
        block = block.with_optional_child(link_to(props, url, &format!("{} - Website", name))?);
    }
    if let Some(email) = selectors.contact_email() {
        block = block.with_optional_child(link_to(
            props,
            &format!("mailto:{}", email),
            &format!("Send email to {}", name),
        )?);
    }

    Ok(Some(block))
}

fn license(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let name = selectors.license_name();

    let content = match (selectors.license_url(), name) {
        (Some(url), name) => link_to(props, url, name.unwrap_or(url))?,
        (None, Some(name)) => Some(VNode::text(name)),
        (None, None) => None,
    };

    Ok(content.map(|content| VNode::element("div").with_class("info__license").with_child(content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ComponentRegistry;
    use crate::sanitize::SchemeSanitizer;
    use crate::vdom_ext::{as_element, collect_links, find_by_class, text_content};
    use apiview_document::{Document, DocumentSelectors};

    fn render(document: &Document, name: &str, args: &[(&str, &str)]) -> Option<VNode> {
        let registry = ComponentRegistry::with_builtins();
        let selectors = DocumentSelectors::new(document);
        let props = Props::new(&registry, &selectors, &SchemeSanitizer);
        let child = args
            .iter()
            .fold(props.child(), |child, (key, value)| child.with_arg(*key, *value));
        props.render_with(name, true, child).unwrap()
    }

    fn doc(json: &str) -> Document {
        Document::from_json_str(json).unwrap()
    }

    #[test]
    fn test_link_is_sanitized() {
        let document = Document::default();
        let node = render(&document, names::LINK, &[("href", "http://x"), ("label", "X")]).unwrap();
        let anchor = as_element(&node).unwrap();

        assert_eq!(anchor.attr("href"), Some("http://x"));
        assert_eq!(anchor.attr("rel"), Some("noopener noreferrer"));
        assert_eq!(text_content(&node), "X");

        assert!(render(&document, names::LINK, &[("href", "javascript:alert(1)")]).is_none());
        assert!(render(&document, names::LINK, &[]).is_none());
    }

    #[test]
    fn test_link_label_defaults_to_href() {
        let document = Document::default();
        let node = render(&document, names::LINK, &[("href", "/docs")]).unwrap();
        assert_eq!(text_content(&node), "/docs");
    }

    #[test]
    fn test_markdown_skips_blank_source() {
        let document = Document::default();
        assert!(render(&document, names::MARKDOWN, &[("source", "  ")]).is_none());

        let node = render(&document, names::MARKDOWN, &[("source", "*hi*")]).unwrap();
        assert!(as_element(&node).unwrap().has_class("markdown"));
        assert_eq!(text_content(&node), "hi");
    }

    #[test]
    fn test_openapi_version_label() {
        let node = render(&doc(r#"{"openapi": "3.1.0"}"#), names::OPENAPI_VERSION, &[]).unwrap();
        assert_eq!(text_content(&node), "OAS 3.1");

        let node = render(&doc(r#"{"swagger": "2.0"}"#), names::OPENAPI_VERSION, &[]).unwrap();
        assert_eq!(text_content(&node), "OAS 2.0");

        let node = render(&Document::default(), names::OPENAPI_VERSION, &[]).unwrap();
        assert_eq!(text_content(&node), "OAS");
    }

    #[test]
    fn test_json_schema_dialect_only_for_oas31() {
        assert!(render(&doc(r#"{"openapi": "3.0.0"}"#), names::JSON_SCHEMA_DIALECT, &[]).is_none());

        let document = doc(r#"{"openapi": "3.1.0"}"#);
        let node = render(&document, names::JSON_SCHEMA_DIALECT, &[]).unwrap();
        let links = collect_links(std::slice::from_ref(&node));
        assert_eq!(links[0].href, apiview_document::OAS31_DEFAULT_DIALECT);
    }

    #[test]
    fn test_stock_info_keeps_contact_inline() {
        let document = doc(r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "Pet Store",
                "version": "1.0",
                "contact": { "name": "A", "email": "a@x.com" },
                "license": { "name": "MIT" }
            }
        }"#);
        let node = render(&document, names::INFO_CONTAINER, &[]).unwrap();
        let nodes = vec![node];

        let contact = find_by_class(&nodes, "info__contact").unwrap();
        assert_eq!(
            collect_links(std::slice::from_ref(contact))[0].href,
            "mailto:a@x.com"
        );
        assert_eq!(text_content(find_by_class(&nodes, "info__license").unwrap()), "MIT");
    }

    #[test]
    fn test_info_container_empty_document() {
        assert!(render(&Document::default(), names::INFO_CONTAINER, &[]).is_none());
    }
}
