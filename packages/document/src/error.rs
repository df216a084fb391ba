use thiserror::Error;

/// Errors raised while loading a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
