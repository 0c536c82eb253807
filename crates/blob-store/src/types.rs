use serde::{Deserialize, Serialize};

/// Content kind of a versioned blob.
///
/// The mapping index tags every blob attached to a run with its kind;
/// code-version resolution only ever reads `Code` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlobType {
    Code,
    Dataset,
    Config,
    Environment,
}

/// Dirty flag of a git working tree, kept as a three-value state.
///
/// `Unset` is distinguishable from `Clean`: a snapshot merged from a row
/// without any git reference carries `Unset`, never `Clean`. The
/// discriminants match the store's wire encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirtyState {
    #[default]
    Unset = 0,
    Dirty = 1,
    Clean = 2,
}

impl From<bool> for DirtyState {
    fn from(is_dirty: bool) -> Self {
        if is_dirty {
            DirtyState::Dirty
        } else {
            DirtyState::Clean
        }
    }
}

/// Point-in-time git state, content-addressed by blob hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitBlob {
    pub repo_url: String,
    pub commit_hash: String,
    pub is_dirty: DirtyState,
}

/// Notebook blob wrapping a git snapshot.
///
/// The git reference is embedded by value; resolution never re-fetches it
/// by content hash. The optional path component lives in its own table and
/// is joined through `path_dataset_blob_id`, not through the notebook's
/// content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookBlob {
    pub git_blob: GitBlob,
    pub path_dataset_blob_id: Option<String>,
}

/// Single file-system path component, keyed by `path_dataset_blob_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathBlob {
    pub path: String,
}

/// One (run, location, blob) association in the mapping index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    /// Owning experiment-run id.
    pub run_id: String,

    /// Serialized location document; opaque until decoded by the caller.
    pub location_key: String,

    pub blob_type: BlobType,

    /// Owning repository, absent for non-repository-backed blobs.
    pub repository_id: Option<u64>,

    /// Key into the blob variant tables.
    pub content_hash: String,
}
