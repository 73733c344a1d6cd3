use thiserror::Error;

/// Errors raised at the engine's fallible boundaries (catalog loading, configuration).
/// Planning itself is best-effort and never fails.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Catalog has no exercises for category: {0}")]
    MissingCategory(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
