use crate::access::QueryScope;
use crate::config::ResolverConfig;
use crate::error::{CodeVersionError, Result};
use crate::location::Location;
use crate::types::CodeVersion;
use indexmap::IndexMap;
use runledger_blob_store::{BlobStore, CodeRow};
use std::collections::HashSet;

/// Resolution output: run id → canonical location string → code version.
/// Both maps keep first-seen insertion order.
pub type CodeVersionMap = IndexMap<String, IndexMap<String, CodeVersion>>;

/// Resolves the code versions attached to a batch of experiment runs.
///
/// Stateless per call: one batched store query, then an in-memory merge.
/// Safe to share across concurrent requests.
pub struct CodeVersionResolver<S> {
    store: S,
    config: ResolverConfig,
}

impl<S: BlobStore> CodeVersionResolver<S> {
    pub fn new(store: S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve code versions for every run in `run_ids`.
    ///
    /// Returns either the complete mapping or one typed error, never a
    /// partially populated result. The deliberate exception is the
    /// privilege short-circuit: enforcement on plus an empty allow-list
    /// yields an empty map without any store query.
    pub async fn resolve(
        &self,
        run_ids: &HashSet<String>,
        allowed_repository_ids: &[String],
    ) -> Result<CodeVersionMap> {
        let scope = QueryScope::evaluate(
            self.config.enforce_repository_privileges,
            allowed_repository_ids,
        )?;
        if scope == QueryScope::DenyAll {
            log::debug!("empty repository allow-list, skipping code blob query");
            return Ok(CodeVersionMap::new());
        }

        let rows = self
            .store
            .query_code_rows(run_ids, scope.repository_ids())
            .await?;
        log::debug!("code blob rows fetched: {}", rows.len());

        let mut by_run = CodeVersionMap::new();
        for row in &rows {
            let location = Location::decode(&row.location_key).map_err(|err| match err {
                CodeVersionError::MalformedLocation(reason) => CodeVersionError::LocationDecode {
                    run_id: row.run_id.clone(),
                    raw: row.location_key.clone(),
                    reason,
                },
                other => other,
            })?;

            // Duplicate (run, location) rows should not occur in
            // well-formed data; the last row wins when they do.
            by_run
                .entry(row.run_id.clone())
                .or_insert_with(IndexMap::new)
                .insert(location.to_key(), merge_row(row));
        }
        Ok(by_run)
    }
}

/// Merge one joined row into a code version.
///
/// A notebook always contributes its own embedded git reference, never a
/// sibling top-level git blob in the same row; a row matching no variant
/// at all still contributes the empty code version.
fn merge_row(row: &CodeRow) -> CodeVersion {
    if let Some(notebook) = &row.notebook {
        CodeVersion::from_git_blob(&notebook.git_blob, row.path.as_ref())
    } else if let Some(git) = &row.git {
        CodeVersion::from_git_blob(git, None)
    } else {
        CodeVersion::default()
    }
}
