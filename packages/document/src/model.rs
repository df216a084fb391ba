use crate::error::DocumentResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// API description document (OpenAPI 3.x or Swagger 2.0)
///
/// Only the fields the documentation panels read are modelled. Unknown
/// fields are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// OpenAPI 3.1 `jsonSchemaDialect`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema_dialect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// OpenAPI 3.1 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Markdown source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// SPDX expression (OpenAPI 3.1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Returns the string when it is present and not blank
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
}

impl Document {
    pub fn from_json_str(source: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl Info {
    /// True when the section carries nothing worth rendering
    pub fn is_empty(&self) -> bool {
        present(&self.title).is_none()
            && present(&self.version).is_none()
            && present(&self.summary).is_none()
            && present(&self.description).is_none()
            && present(&self.terms_of_service).is_none()
            && self.contact.as_ref().map_or(true, Contact::is_empty)
            && self.license.as_ref().map_or(true, License::is_empty)
    }
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        present(&self.name).is_none()
            && present(&self.url).is_none()
            && present(&self.email).is_none()
    }
}

impl License {
    pub fn is_empty(&self) -> bool {
        present(&self.name).is_none()
            && present(&self.url).is_none()
            && present(&self.identifier).is_none()
    }
}

impl ExternalDocs {
    pub fn is_empty(&self) -> bool {
        present(&self.url).is_none() && present(&self.description).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "openapi": "3.1.0",
            "info": {
                "title": "Pet Store",
                "version": "1.0",
                "termsOfService": "http://x/tos",
                "contact": { "name": "A", "email": "a@x.com" },
                "license": { "name": "MIT" }
            },
            "externalDocs": { "url": "https://docs.example.com" },
            "paths": {}
        }"#;

        let doc = Document::from_json_str(json).unwrap();
        let info = doc.info.as_ref().unwrap();
        assert_eq!(doc.openapi.as_deref(), Some("3.1.0"));
        assert_eq!(info.title.as_deref(), Some("Pet Store"));
        assert_eq!(info.terms_of_service.as_deref(), Some("http://x/tos"));
        assert_eq!(info.contact.as_ref().unwrap().email.as_deref(), Some("a@x.com"));
        assert_eq!(
            doc.external_docs.as_ref().unwrap().url.as_deref(),
            Some("https://docs.example.com")
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = Document::from_json_str("{ not json");
        assert!(matches!(result, Err(crate::DocumentError::Json(_))));
    }

    #[test]
    fn test_empty_sections() {
        assert!(Info::default().is_empty());
        assert!(Contact::default().is_empty());

        let blank = Info {
            title: Some("  ".to_string()),
            contact: Some(Contact::default()),
            ..Default::default()
        };
        assert!(blank.is_empty());

        let with_license = Info {
            license: Some(License {
                name: Some("MIT".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!with_license.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"swagger": "2.0", "info": {{"title": "Legacy"}}}}"#).unwrap();

        let doc = Document::from_path(file.path()).unwrap();
        assert_eq!(doc.swagger.as_deref(), Some("2.0"));
        assert_eq!(doc.info.unwrap().title.as_deref(), Some("Legacy"));
    }

    #[test]
    fn test_missing_file() {
        let result = Document::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(crate::DocumentError::Io(_))));
    }
}
