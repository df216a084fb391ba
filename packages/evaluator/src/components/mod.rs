//! Footer plugin
//!
//! Moves contact, license, terms of service and external documentation out
//! of the info panel into a dedicated footer. The info panel keeps the
//! title, version stamps, summary and description.

mod footer;
mod info;

use crate::plugin::PluginDescriptor;
use crate::registry::{component, names};

pub use footer::{
    footer, footer_contact_email, footer_contact_url, footer_container, footer_license,
};
pub use info::{info_panel, oas31_info_panel};

pub fn footer_plugin() -> PluginDescriptor {
    PluginDescriptor::new("footer")
        .component(names::FOOTER_CONTAINER, component(footer_container))
        .component(names::FOOTER, component(footer))
        .component(names::FOOTER_CONTACT_EMAIL, component(footer_contact_email))
        .component(names::FOOTER_CONTACT_URL, component(footer_contact_url))
        .component(names::FOOTER_LICENSE, component(footer_license))
        .component(names::INFO, component(info_panel))
        .component(names::OAS31_INFO, component(oas31_info_panel))
}
