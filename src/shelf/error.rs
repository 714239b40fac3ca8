use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data file: {0}")]
    CorruptData(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
