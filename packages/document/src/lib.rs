//! # Apiview Document
//!
//! Typed model of an API description (OpenAPI / Swagger) and the selector
//! layer that projects fields out of it. Rendering code never touches the
//! model directly; it only goes through [`SpecSelectors`].

pub mod error;
pub mod model;
pub mod selectors;

pub use error::{DocumentError, DocumentResult};
pub use model::{Contact, Document, ExternalDocs, Info, License};
pub use selectors::{DocumentSelectors, SpecSelectors, OAS31_DEFAULT_DIALECT};
