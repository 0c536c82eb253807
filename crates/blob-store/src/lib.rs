//! # Runledger Blob Store
//!
//! Content-addressed storage model for run-attached code blobs.
//!
//! ## Architecture
//!
//! ```text
//! MappingRow (run, location, type, repo, hash)
//!     │
//!     ├──> GitBlob table       ── content hash
//!     ├──> NotebookBlob table  ── content hash
//!     │      └─> PathBlob table ── path_dataset_blob_id
//!     │
//!     └──> CodeRow (joined, any variant independently absent)
//! ```
//!
//! Blob variants live in three disjoint tables keyed by content hash
//! (path components by their own secondary key). [`BlobStore`] is the
//! batched read seam consumed by code-version resolution: one query per
//! run-id set, never one per run. [`MemoryBlobStore`] is the in-process
//! reference implementation performing the variant join in application
//! code.
//!
//! ## Example
//!
//! ```rust
//! use runledger_blob_store::{BlobType, DirtyState, GitBlob, MappingRow, MemoryBlobStore};
//!
//! let mut store = MemoryBlobStore::new();
//! store.insert_git_blob(
//!     "b94d27b9",
//!     GitBlob {
//!         repo_url: "https://git.example.com/model.git".to_string(),
//!         commit_hash: "abc123".to_string(),
//!         is_dirty: DirtyState::Clean,
//!     },
//! );
//! store.insert_mapping(MappingRow {
//!     run_id: "run-1".to_string(),
//!     location_key: r#"{"location": ["code"]}"#.to_string(),
//!     blob_type: BlobType::Code,
//!     repository_id: Some(7),
//!     content_hash: "b94d27b9".to_string(),
//! });
//!
//! assert_eq!(store.mapping_count(), 1);
//! ```

mod error;
mod store;
mod types;

pub use error::{BlobStoreError, Result};
pub use store::{BlobStore, CodeRow, MemoryBlobStore};
pub use types::{BlobType, DirtyState, GitBlob, MappingRow, NotebookBlob, PathBlob};
