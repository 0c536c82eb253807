use runledger_blob_store::{DirtyState, GitBlob, PathBlob};
use serde::{Deserialize, Serialize};

/// Normalized point-in-time git state for one run location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSnapshot {
    pub repo: String,
    pub hash: String,
    pub is_dirty: DirtyState,
    /// Files touched at this location; at most one entry here, coming
    /// from a notebook's path component.
    pub filepaths: Vec<String>,
}

/// Code version attached to a run at one location.
///
/// The default value is the empty code version: a row whose content hash
/// matched no blob variant still surfaces its location with this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeVersion {
    pub git_snapshot: GitSnapshot,
}

impl CodeVersion {
    /// Merge a git blob and an optional path component into the output
    /// snapshot shape.
    pub(crate) fn from_git_blob(blob: &GitBlob, path: Option<&PathBlob>) -> Self {
        let mut snapshot = GitSnapshot {
            repo: blob.repo_url.clone(),
            hash: blob.commit_hash.clone(),
            is_dirty: blob.is_dirty,
            filepaths: Vec::new(),
        };
        if let Some(path) = path {
            snapshot.filepaths.push(path.path.clone());
        }
        CodeVersion {
            git_snapshot: snapshot,
        }
    }
}
