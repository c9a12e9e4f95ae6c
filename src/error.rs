use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("Unknown packet: {0}")]
    UnknownPacket(String),

    #[error("Unknown container type: {0}")]
    UnknownContainer(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
