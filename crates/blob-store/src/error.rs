use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlobStoreError>;

#[derive(Error, Debug)]
pub enum BlobStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}
