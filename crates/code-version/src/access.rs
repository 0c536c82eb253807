use crate::error::{CodeVersionError, Result};

/// Outcome of the repository privilege pre-filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScope {
    /// Privilege enforcement is off; the query runs unrestricted.
    Unrestricted,

    /// Restrict the query to blobs owned by these repositories.
    Repositories(Vec<u64>),

    /// The caller may see nothing; no query must be issued at all. An
    /// empty allow-list is never treated as "no restriction".
    DenyAll,
}

impl QueryScope {
    /// Decide how resolution may query the store for a caller with the
    /// given repository allow-list.
    ///
    /// Allow-list entries arrive as opaque strings and must parse into
    /// the store's numeric repository id; a non-numeric entry is a
    /// caller/config error, fatal for the request.
    pub fn evaluate(enforce_privileges: bool, allowed_repository_ids: &[String]) -> Result<Self> {
        if !enforce_privileges {
            return Ok(QueryScope::Unrestricted);
        }
        if allowed_repository_ids.is_empty() {
            return Ok(QueryScope::DenyAll);
        }

        let ids = allowed_repository_ids
            .iter()
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| CodeVersionError::InvalidRepositoryId(raw.clone()))
            })
            .collect::<Result<Vec<u64>>>()?;
        Ok(QueryScope::Repositories(ids))
    }

    /// Repository restriction to hand to the store, if any.
    pub fn repository_ids(&self) -> Option<&[u64]> {
        match self {
            QueryScope::Repositories(ids) => Some(ids),
            QueryScope::Unrestricted | QueryScope::DenyAll => None,
        }
    }
}
