use thiserror::Error;

/// shop-catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to decode a catalog or availability document
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A time string was not "HH:MM"
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for shop-catalog
pub type Result<T> = std::result::Result<T, CatalogError>;
