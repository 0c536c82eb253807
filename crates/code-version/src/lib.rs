//! # Runledger Code Version
//!
//! Batched resolution of the code versions attached to experiment runs.
//!
//! ## Pipeline
//!
//! ```text
//! run ids + repository allow-list
//!     │
//!     ├──> QueryScope (privilege pre-filter)
//!     │      └─> DenyAll → empty result, no query
//!     │
//!     ├──> BlobStore (one batched variant join)
//!     │      └─> CodeRow[]
//!     │
//!     └──> per row: Location decode + variant merge
//!            └─> run id → location → CodeVersion
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use runledger_blob_store::{BlobType, DirtyState, GitBlob, MappingRow, MemoryBlobStore};
//! use runledger_code_version::{CodeVersionResolver, ResolverConfig};
//! use std::collections::HashSet;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = MemoryBlobStore::new();
//!     store.insert_git_blob(
//!         "b94d27b9",
//!         GitBlob {
//!             repo_url: "https://git.example.com/model.git".to_string(),
//!             commit_hash: "abc123".to_string(),
//!             is_dirty: DirtyState::Clean,
//!         },
//!     );
//!     store.insert_mapping(MappingRow {
//!         run_id: "run-1".to_string(),
//!         location_key: r#"{"location": ["code"]}"#.to_string(),
//!         blob_type: BlobType::Code,
//!         repository_id: None,
//!         content_hash: "b94d27b9".to_string(),
//!     });
//!
//!     let resolver = CodeVersionResolver::new(store, ResolverConfig::default());
//!     let run_ids: HashSet<String> = HashSet::from(["run-1".to_string()]);
//!     let versions = resolver.resolve(&run_ids, &[]).await?;
//!
//!     let for_run = &versions["run-1"];
//!     println!("code @ {:?}", for_run["code"].git_snapshot.hash);
//!     Ok(())
//! }
//! ```

mod access;
mod config;
mod error;
mod location;
mod resolver;
mod types;

pub use access::QueryScope;
pub use config::ResolverConfig;
pub use error::{CodeVersionError, Result};
pub use location::Location;
pub use resolver::{CodeVersionMap, CodeVersionResolver};
pub use types::{CodeVersion, GitSnapshot};

// Re-export store types for convenience
pub use runledger_blob_store::{
    BlobStore, BlobStoreError, BlobType, CodeRow, DirtyState, GitBlob, MappingRow, MemoryBlobStore,
    NotebookBlob, PathBlob,
};
