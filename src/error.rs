use thiserror::Error;

/// Errors surfaced by the product browser.
///
/// The `Display` text is what the page shows in its error state.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(u16),

    #[error("Invalid catalog data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
