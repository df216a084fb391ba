//! Selector layer
//!
//! Total, side-effect-free accessors over a [`Document`]. Every selector
//! returns `None` for a missing field, a blank string, or an empty section,
//! so callers only ever perform one absence check per field.

use crate::model::{present, Contact, Document, ExternalDocs, Info, License};

/// Base dialect assumed by OpenAPI 3.1 when `jsonSchemaDialect` is not set
pub const OAS31_DEFAULT_DIALECT: &str = "https://spec.openapis.org/oas/3.1/dialect/base";

/// Read-only view of an API description
pub trait SpecSelectors {
    /// The info section, only when it is non-empty
    fn info(&self) -> Option<&Info>;

    /// The contact section, only when it is non-empty
    fn contact(&self) -> Option<&Contact>;

    /// The license section, only when it is non-empty
    fn license(&self) -> Option<&License>;

    fn external_docs(&self) -> Option<&ExternalDocs>;

    /// Raw `openapi` (or `swagger`) version string
    fn spec_version(&self) -> Option<&str>;

    /// Explicit `jsonSchemaDialect`
    fn json_schema_dialect(&self) -> Option<&str>;

    fn title(&self) -> Option<&str> {
        self.info().and_then(|info| present(&info.title))
    }

    fn version(&self) -> Option<&str> {
        self.info().and_then(|info| present(&info.version))
    }

    fn summary(&self) -> Option<&str> {
        self.info().and_then(|info| present(&info.summary))
    }

    fn description(&self) -> Option<&str> {
        self.info().and_then(|info| present(&info.description))
    }

    fn terms_of_service_url(&self) -> Option<&str> {
        self.info().and_then(|info| present(&info.terms_of_service))
    }

    fn contact_name(&self) -> Option<&str> {
        self.contact().and_then(|contact| present(&contact.name))
    }

    fn contact_url(&self) -> Option<&str> {
        self.contact().and_then(|contact| present(&contact.url))
    }

    fn contact_email(&self) -> Option<&str> {
        self.contact().and_then(|contact| present(&contact.email))
    }

    fn license_name(&self) -> Option<&str> {
        self.license().and_then(|license| present(&license.name))
    }

    fn license_url(&self) -> Option<&str> {
        self.license().and_then(|license| present(&license.url))
    }

    fn external_docs_url(&self) -> Option<&str> {
        self.external_docs().and_then(|docs| present(&docs.url))
    }

    fn external_docs_description(&self) -> Option<&str> {
        self.external_docs().and_then(|docs| present(&docs.description))
    }

    fn is_oas3(&self) -> bool {
        self.spec_version().is_some_and(|v| v.starts_with("3."))
    }

    fn is_oas31(&self) -> bool {
        self.spec_version().is_some_and(|v| v.starts_with("3.1."))
    }

    /// Dialect in effect when none is declared (3.1 documents only)
    fn json_schema_dialect_default(&self) -> Option<&str> {
        self.is_oas31().then_some(OAS31_DEFAULT_DIALECT)
    }
}

/// Selectors backed by a loaded [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct DocumentSelectors<'a> {
    document: &'a Document,
}

impl<'a> DocumentSelectors<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl SpecSelectors for DocumentSelectors<'_> {
    fn info(&self) -> Option<&Info> {
        self.document.info.as_ref().filter(|info| !info.is_empty())
    }

    fn contact(&self) -> Option<&Contact> {
        self.info()
            .and_then(|info| info.contact.as_ref())
            .filter(|contact| !contact.is_empty())
    }

    fn license(&self) -> Option<&License> {
        self.info()
            .and_then(|info| info.license.as_ref())
            .filter(|license| !license.is_empty())
    }

    fn external_docs(&self) -> Option<&ExternalDocs> {
        self.document
            .external_docs
            .as_ref()
            .filter(|docs| !docs.is_empty())
    }

    fn spec_version(&self) -> Option<&str> {
        present(&self.document.openapi).or_else(|| present(&self.document.swagger))
    }

    fn json_schema_dialect(&self) -> Option<&str> {
        present(&self.document.json_schema_dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> Document {
        Document::from_json_str(json).unwrap()
    }

    #[test]
    fn test_info_fields() {
        let document = doc(r#"{
            "openapi": "3.0.3",
            "info": { "title": "Pet Store", "version": "1.0", "description": "**hi**" }
        }"#);
        let selectors = DocumentSelectors::new(&document);

        assert_eq!(selectors.title(), Some("Pet Store"));
        assert_eq!(selectors.version(), Some("1.0"));
        assert_eq!(selectors.description(), Some("**hi**"));
        assert_eq!(selectors.summary(), None);
        assert!(selectors.is_oas3());
        assert!(!selectors.is_oas31());
        assert_eq!(selectors.json_schema_dialect_default(), None);
    }

    #[test]
    fn test_absent_info() {
        let document = Document::default();
        let selectors = DocumentSelectors::new(&document);

        assert!(selectors.info().is_none());
        assert!(selectors.title().is_none());
        assert!(selectors.contact().is_none());
        assert!(selectors.spec_version().is_none());
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let document = doc(r#"{
            "info": { "title": "T", "termsOfService": "", "contact": { "email": " " } }
        }"#);
        let selectors = DocumentSelectors::new(&document);

        assert_eq!(selectors.terms_of_service_url(), None);
        assert!(selectors.contact().is_none());
        assert_eq!(selectors.contact_email(), None);
    }

    #[test]
    fn test_empty_info_hides_nested_sections() {
        let document = doc(r#"{ "info": { "contact": {}, "license": {} } }"#);
        let selectors = DocumentSelectors::new(&document);

        assert!(selectors.info().is_none());
        assert!(selectors.license().is_none());
    }

    #[test]
    fn test_oas31_dialect() {
        let document = doc(r#"{ "openapi": "3.1.0", "info": { "title": "T" } }"#);
        let selectors = DocumentSelectors::new(&document);

        assert!(selectors.is_oas31());
        assert_eq!(selectors.json_schema_dialect(), None);
        assert_eq!(selectors.json_schema_dialect_default(), Some(OAS31_DEFAULT_DIALECT));
    }

    #[test]
    fn test_swagger_version_fallback() {
        let document = doc(r#"{ "swagger": "2.0" }"#);
        let selectors = DocumentSelectors::new(&document);

        assert_eq!(selectors.spec_version(), Some("2.0"));
        assert!(!selectors.is_oas3());
    }

    #[test]
    fn test_external_docs() {
        let document = doc(r#"{ "externalDocs": { "url": "https://docs.example.com" } }"#);
        let selectors = DocumentSelectors::new(&document);

        assert_eq!(selectors.external_docs_url(), Some("https://docs.example.com"));
        assert_eq!(selectors.external_docs_description(), None);
    }
}
