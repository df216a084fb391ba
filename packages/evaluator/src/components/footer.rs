use crate::builtins::link_to;
use crate::evaluator::EvalResult;
use crate::props::Props;
use crate::registry::names;
use crate::vdom::VNode;

const DEFAULT_CONTACT_NAME: &str = "the developer";

/// Renders the footer only when the document has a non-empty info section
pub fn footer_container(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    if props.spec_selectors().info().is_none() {
        return Ok(None);
    }
    props.render(names::FOOTER, true)
}

/// Footer list: terms, contact, license, external docs
///
/// Each item is gated on its own field. An item whose link is rejected by
/// the sanitizer, or whose optional component is not registered, is left
/// out.
pub fn footer(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let mut items = Vec::new();

    if let Some(tos) = selectors.terms_of_service_url() {
        items.push(link_to(props, tos, "Terms of service")?);
    }
    if selectors.contact_url().is_some() {
        items.push(props.render(names::FOOTER_CONTACT_URL, false)?);
    }
    if selectors.contact_email().is_some() {
        items.push(props.render(names::FOOTER_CONTACT_EMAIL, false)?);
    }
    if selectors.license().is_some() {
        items.push(props.render(names::FOOTER_LICENSE, false)?);
    }
    if let Some(url) = selectors.external_docs_url() {
        let label = selectors.external_docs_description().unwrap_or(url);
        items.push(link_to(props, url, label)?);
    }

    let list = VNode::element("ul").with_class("footer__list").with_children(
        items
            .into_iter()
            .flatten()
            .map(|item| VNode::element("li").with_class("footer__item").with_child(item)),
    );

    Ok(Some(VNode::element("div").with_class("footer").with_child(list)))
}

pub fn footer_contact_url(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let Some(url) = selectors.contact_url() else {
        return Ok(None);
    };
    let name = selectors.contact_name().unwrap_or(DEFAULT_CONTACT_NAME);

    link_to(props, url, &format!("{} - Website", name))
}

pub fn footer_contact_email(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();
    let Some(email) = selectors.contact_email() else {
        return Ok(None);
    };
    let name = selectors.contact_name().unwrap_or(DEFAULT_CONTACT_NAME);

    link_to(props, &format!("mailto:{}", email), &format!("Contact {}", name))
}

/// License link when a URL is present, plain name otherwise
pub fn footer_license(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let selectors = props.spec_selectors();

    match (selectors.license_url(), selectors.license_name()) {
        (Some(url), name) => link_to(props, url, name.unwrap_or(url)),
        (None, Some(name)) => Ok(Some(
            VNode::element("span")
                .with_class("footer__license")
                .with_child(VNode::text(name)),
        )),
        (None, None) => Ok(None),
    }
}
