use runledger_blob_store::BlobStoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodeVersionError>;

#[derive(Error, Debug)]
pub enum CodeVersionError {
    #[error("Blob store error: {0}")]
    Store(#[from] BlobStoreError),

    #[error("Invalid repository id in allow-list: {0:?}")]
    InvalidRepositoryId(String),

    #[error("Malformed location: {0}")]
    MalformedLocation(String),

    #[error("Error decoding location {raw:?} for run {run_id}: {reason}")]
    LocationDecode {
        run_id: String,
        raw: String,
        reason: String,
    },
}
