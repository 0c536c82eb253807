use crate::error::Result;
use crate::types::{BlobType, GitBlob, MappingRow, NotebookBlob, PathBlob};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// One joined result row: a mapping-index entry plus whatever blob
/// variants its content hash matched.
///
/// The variant tables are disjoint in practice, but each column is
/// resolved independently so a hash matching none (or, in malformed data,
/// more than one) still produces a well-formed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub run_id: String,
    pub location_key: String,
    pub git: Option<GitBlob>,
    pub notebook: Option<NotebookBlob>,
    pub path: Option<PathBlob>,
}

/// Read capability over the blob variant store and mapping index.
///
/// Implementations issue exactly one batched lookup for the whole run-id
/// set; callers rely on this to avoid per-run query fan-out.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch all CODE rows for the given runs, optionally restricted to
    /// the given repository ids. Rows come back in the store's stable
    /// iteration order.
    async fn query_code_rows(
        &self,
        run_ids: &HashSet<String>,
        repository_ids: Option<&[u64]>,
    ) -> Result<Vec<CodeRow>>;
}

/// In-memory reference store: mapping rows plus three per-variant tables.
///
/// Git and notebook blobs are keyed by content hash; path components are
/// keyed by their own `path_dataset_blob_id` and only reachable through a
/// notebook's reference.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    mappings: Vec<MappingRow>,
    git_blobs: HashMap<String, GitBlob>,
    notebook_blobs: HashMap<String, NotebookBlob>,
    path_blobs: HashMap<String, PathBlob>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a blob to a run at a location. Rows keep insertion order.
    pub fn insert_mapping(&mut self, row: MappingRow) {
        self.mappings.push(row);
    }

    pub fn insert_git_blob(&mut self, content_hash: impl Into<String>, blob: GitBlob) {
        self.git_blobs.insert(content_hash.into(), blob);
    }

    pub fn insert_notebook_blob(&mut self, content_hash: impl Into<String>, blob: NotebookBlob) {
        self.notebook_blobs.insert(content_hash.into(), blob);
    }

    pub fn insert_path_blob(&mut self, path_dataset_blob_id: impl Into<String>, blob: PathBlob) {
        self.path_blobs.insert(path_dataset_blob_id.into(), blob);
    }

    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    fn admits(row: &MappingRow, run_ids: &HashSet<String>, repository_ids: Option<&[u64]>) -> bool {
        if row.blob_type != BlobType::Code || !run_ids.contains(&row.run_id) {
            return false;
        }
        match repository_ids {
            None => true,
            Some(allowed) => row
                .repository_id
                .is_some_and(|id| allowed.contains(&id)),
        }
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn query_code_rows(
        &self,
        run_ids: &HashSet<String>,
        repository_ids: Option<&[u64]>,
    ) -> Result<Vec<CodeRow>> {
        let mut rows = Vec::new();
        for mapping in &self.mappings {
            if !Self::admits(mapping, run_ids, repository_ids) {
                continue;
            }

            let notebook = self.notebook_blobs.get(&mapping.content_hash).cloned();
            let path = notebook
                .as_ref()
                .and_then(|n| n.path_dataset_blob_id.as_deref())
                .and_then(|id| self.path_blobs.get(id))
                .cloned();

            rows.push(CodeRow {
                run_id: mapping.run_id.clone(),
                location_key: mapping.location_key.clone(),
                git: self.git_blobs.get(&mapping.content_hash).cloned(),
                notebook,
                path,
            });
        }

        log::debug!(
            "code blob query matched {} of {} mapping rows",
            rows.len(),
            self.mappings.len()
        );
        Ok(rows)
    }
}
